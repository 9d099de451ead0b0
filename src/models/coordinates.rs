// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validated latitude/longitude pairs.

use crate::error::CoordinateError;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A latitude/longitude pair known to be within range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting values outside the valid ranges.
    ///
    /// Latitude is checked before longitude. `NaN` is never in range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !LATITUDE_RANGE.contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !LONGITUDE_RANGE.contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Parse raw latitude/longitude input (for example query parameters).
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. latitude present, 2. longitude present,
/// 3. latitude numeric, 4. longitude numeric,
/// 5. latitude in range, 6. longitude in range.
///
/// Surrounding whitespace is ignored. Non-finite values (`NaN`, `inf`) are
/// treated as non-numeric, so they fail at step 3/4 rather than at the range
/// check; a plain float parse would accept them and leave the rejection to
/// steps 5/6.
///
/// # Examples
///
/// ```
/// use sakura_catalog::models::coordinates::parse_coordinates;
/// use sakura_catalog::CoordinateError;
///
/// let coords = parse_coordinates(Some("35.6"), Some("139.7")).unwrap();
/// assert_eq!(coords.lat(), 35.6);
/// assert_eq!(
///     parse_coordinates(None, Some("abc")),
///     Err(CoordinateError::MissingLatitude)
/// );
/// ```
pub fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Result<Coordinates, CoordinateError> {
    let lat = lat.ok_or(CoordinateError::MissingLatitude)?;
    let lon = lon.ok_or(CoordinateError::MissingLongitude)?;

    let lat_value =
        parse_finite(lat).ok_or_else(|| CoordinateError::LatitudeNotNumeric(lat.to_string()))?;
    let lon_value =
        parse_finite(lon).ok_or_else(|| CoordinateError::LongitudeNotNumeric(lon.to_string()))?;

    Coordinates::new(lat_value, lon_value)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
