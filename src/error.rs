// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error types for catalog loading, coordinate validation and forecasting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a city catalog.
///
/// Every variant except [`CatalogError::Io`] means the resource itself is
/// malformed; see [`CatalogError::is_malformed`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read city catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a `{"cities": [...]}` document of well-typed records.
    #[error("Malformed city catalog {source_name}: {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same id.
    #[error("Malformed city catalog {source_name}: duplicate id {id} at records {first} and {second}")]
    DuplicateId {
        source_name: String,
        id: i64,
        first: usize,
        second: usize,
    },

    /// A record carries coordinates outside the valid range.
    #[error("Malformed city catalog {source_name}: city {id}: {source}")]
    InvalidCoordinates {
        source_name: String,
        id: i64,
        #[source]
        source: CoordinateError,
    },

    /// A record has an empty (or whitespace-only) name.
    #[error("Malformed city catalog {source_name}: city {id} has an empty name")]
    EmptyName { source_name: String, id: i64 },
}

impl CatalogError {
    /// Whether the error describes a malformed resource rather than an I/O failure.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Coordinate parsing and range errors, reported in check order.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude is missing")]
    MissingLatitude,

    #[error("longitude is missing")]
    MissingLongitude,

    #[error("latitude is not a number: {0:?}")]
    LatitudeNotNumeric(String),

    #[error("longitude is not a number: {0:?}")]
    LongitudeNotNumeric(String),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Errors raised while loading forecast models or computing a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to read forecast models {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed forecast models {source_name}: {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid forecast models {source_name}: {reason}")]
    InvalidModel { source_name: String, reason: String },

    #[error(transparent)]
    Coordinates(#[from] CoordinateError),

    /// The predicted offset does not land on a representable calendar date.
    #[error("Predicted offset of {days} days does not map to a calendar date")]
    DateOutOfRange { days: f64 },
}
