// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! City record as stored in the bundled catalog resource.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;
use crate::models::coordinates::Coordinates;

/// A single city: stable id, position in degrees, and display name.
///
/// Unknown fields in the source document are rejected rather than ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct City {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl City {
    pub fn new(id: i64, lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            id,
            lat,
            lon,
            name: name.into(),
        }
    }

    /// Range-checked position of this city.
    pub fn coordinates(&self) -> Result<Coordinates, CoordinateError> {
        Coordinates::new(self.lat, self.lon)
    }

    /// Whether the display name has visible content.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::City;
    use crate::error::CoordinateError;

    #[test]
    fn deserializes_integer_coordinates_as_floats() {
        let city: City =
            serde_json::from_str(r#"{"id":7,"lat":35,"lon":139,"name":"Somewhere"}"#).unwrap();
        assert_eq!(city, City::new(7, 35.0, 139.0, "Somewhere"));
    }

    #[test]
    fn rejects_fractional_id_and_unknown_fields() {
        assert!(serde_json::from_str::<City>(r#"{"id":1.5,"lat":0,"lon":0,"name":"x"}"#).is_err());
        assert!(
            serde_json::from_str::<City>(r#"{"id":1,"lat":0,"lon":0,"name":"x","pop":3}"#).is_err()
        );
    }

    #[test]
    fn coordinates_are_range_checked() {
        let city = City::new(1, 95.0, 0.0, "Nowhere");
        assert_eq!(
            city.coordinates(),
            Err(CoordinateError::LatitudeOutOfRange(95.0))
        );
        assert!(!City::new(2, 0.0, 0.0, "  ").has_name());
    }
}
