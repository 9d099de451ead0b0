// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Bundled city catalog for a map/list front end, plus cherry-blossom bloom forecasts.
//!
//! The catalog is loaded once from a resource compiled into the crate,
//! validated as a whole, and exposed as an immutable, ordered list with id
//! lookup. A GUI host typically calls [`Catalog::global`] during startup and
//! aborts when it returns an error.

pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use error::{CatalogError, CoordinateError, ForecastError};
pub use logic::catalog::{Catalog, all, find_by_id, load};
pub use logic::forecast::{BloomForecast, BloomForecaster, LinearModel};
pub use models::city::City;
pub use models::coordinates::{Coordinates, parse_coordinates};
