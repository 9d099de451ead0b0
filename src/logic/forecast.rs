// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cherry-blossom bloom date forecasts from pre-trained linear models.
//!
//! Two models map a position to a number of days after a fixed base date:
//! one for first bloom ("kaika") and one for full bloom ("mankai").

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Duration};

use crate::error::ForecastError;
use crate::models::city::City;
use crate::models::coordinates::Coordinates;

/// Name reported in diagnostics for the models compiled into the crate.
pub const BUNDLED_MODELS_NAME: &str = "assets/models.json";

const BUNDLED_MODELS: &str = include_str!("../../assets/models.json");

/// `intercept + lat * latitude + lon * longitude`, in days.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearModel {
    pub intercept: f64,
    pub lat: f64,
    pub lon: f64,
}

impl LinearModel {
    pub fn predict(&self, coords: Coordinates) -> f64 {
        self.intercept + self.lat * coords.lat() + self.lon * coords.lon()
    }

    fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.lat.is_finite() && self.lon.is_finite()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelsFile {
    base_date: String,
    kaika: LinearModel,
    mankai: LinearModel,
}

/// Predicted first-bloom and full-bloom dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BloomForecast {
    pub kaika_date: Date,
    pub mankai_date: Date,
}

impl Serialize for BloomForecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Formatted {
            kaika_date: String,
            mankai_date: String,
        }

        Formatted {
            kaika_date: format_date(self.kaika_date).map_err(serde::ser::Error::custom)?,
            mankai_date: format_date(self.mankai_date).map_err(serde::ser::Error::custom)?,
        }
        .serialize(serializer)
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

/// Forecasts bloom dates from a base date and the two day-offset models.
#[derive(Clone, Debug, PartialEq)]
pub struct BloomForecaster {
    base_date: Date,
    kaika: LinearModel,
    mankai: LinearModel,
}

impl BloomForecaster {
    pub fn new(base_date: Date, kaika: LinearModel, mankai: LinearModel) -> Self {
        Self {
            base_date,
            kaika,
            mankai,
        }
    }

    /// Models shipped with the crate.
    ///
    /// The bundled coefficients are illustrative defaults hand-fitted to a few
    /// typical bloom dates, not calibrated models. Load trained coefficients
    /// with [`BloomForecaster::from_path`] for real forecasts.
    pub fn bundled() -> Result<Self, ForecastError> {
        Self::from_json_str(BUNDLED_MODELS_NAME, BUNDLED_MODELS)
    }

    /// Parse a models document:
    /// `{"base_date": "YYYY-MM-DD", "kaika": {..}, "mankai": {..}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Malformed`] for shape errors and
    /// [`ForecastError::InvalidModel`] for an unparsable base date or
    /// non-finite coefficients.
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self, ForecastError> {
        Self::from_json_slice(source_name, json.as_bytes())
    }

    /// Same as [`BloomForecaster::from_json_str`], for raw bytes. Invalid UTF-8
    /// is reported as [`ForecastError::Malformed`].
    pub fn from_json_slice(source_name: &str, json: &[u8]) -> Result<Self, ForecastError> {
        let file: ModelsFile =
            serde_json::from_slice(json).map_err(|source| ForecastError::Malformed {
                source_name: source_name.to_string(),
                source,
            })?;

        let base_date = Date::parse(&file.base_date, format_description!("[year]-[month]-[day]"))
            .map_err(|err| ForecastError::InvalidModel {
                source_name: source_name.to_string(),
                reason: format!("base_date {:?}: {}", file.base_date, err),
            })?;

        for (label, model) in [("kaika", &file.kaika), ("mankai", &file.mankai)] {
            if !model.is_finite() {
                return Err(ForecastError::InvalidModel {
                    source_name: source_name.to_string(),
                    reason: format!("{label} model has non-finite coefficients"),
                });
            }
        }

        tracing::debug!(source = source_name, %base_date, "loaded forecast models");
        Ok(Self::new(base_date, file.kaika, file.mankai))
    }

    pub fn from_path(path: &Path) -> Result<Self, ForecastError> {
        let json = fs::read(path).map_err(|source| ForecastError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&path.display().to_string(), &json)
    }

    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Forecast bloom dates at a position.
    ///
    /// Each prediction is a fractional day count after the base date; the
    /// forecast date is the calendar day that offset falls in, so fractions
    /// round towards the past (`-0.5` lands on the day before the base date).
    pub fn forecast(&self, coords: Coordinates) -> Result<BloomForecast, ForecastError> {
        Ok(BloomForecast {
            kaika_date: self.offset_date(self.kaika.predict(coords))?,
            mankai_date: self.offset_date(self.mankai.predict(coords))?,
        })
    }

    /// Forecast bloom dates at a catalog city's position.
    pub fn forecast_city(&self, city: &City) -> Result<BloomForecast, ForecastError> {
        let forecast = self.forecast(city.coordinates()?)?;
        tracing::debug!(city = city.id, name = %city.name, ?forecast, "forecast city");
        Ok(forecast)
    }

    fn offset_date(&self, days: f64) -> Result<Date, ForecastError> {
        let whole = days.floor();
        // Date spans roughly ±3.6 million days; anything beyond cannot land.
        if !whole.is_finite() || whole.abs() > 1.0e7 {
            return Err(ForecastError::DateOutOfRange { days });
        }
        self.base_date
            .checked_add(Duration::days(whole as i64))
            .ok_or(ForecastError::DateOutOfRange { days })
    }
}
