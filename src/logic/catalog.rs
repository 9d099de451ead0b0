// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! City catalog loading, validation and lookup.
//!
//! Responsibilities:
//! - Parse the `{"cities": [...]}` resource into typed [`City`] records.
//! - Reject malformed resources as a whole (bad shape, duplicate ids,
//!   out-of-range coordinates, empty names); a partial catalog is never built.
//! - Serve id lookups, ordered iteration and name search over the immutable result.
//!
//! # Usage
//!
//! ```
//! use sakura_catalog::Catalog;
//!
//! let catalog = Catalog::global().unwrap();
//! let tokyo = catalog.find_by_id(13).unwrap();
//! assert_eq!(tokyo.name, "Tokyo");
//! assert!(catalog.find_by_id(-1).is_none());
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::city::City;
use crate::utils::fold_name;

/// Name reported in diagnostics for the resource compiled into the crate.
pub const BUNDLED_SOURCE_NAME: &str = "assets/cities.json";

/// The bundled catalog resource, fixed at build time.
const BUNDLED_CITIES: &str = include_str!("../../assets/cities.json");

/// On-disk shape of the catalog resource.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    cities: Vec<City>,
}

/// Borrowed counterpart of [`CatalogFile`] for serialization.
#[derive(Serialize)]
struct CatalogFileRef<'a> {
    cities: &'a [City],
}

/// Immutable, validated collection of cities in source order.
///
/// There are no mutating methods; once built, a catalog can be shared
/// across threads freely.
#[derive(Clone, Debug)]
pub struct Catalog {
    source_name: String,
    cities: Vec<City>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Parse and validate a catalog from a JSON string.
    ///
    /// `source_name` only labels diagnostics (a path, or the bundled asset name).
    ///
    /// # Errors
    ///
    /// Returns a malformed-resource [`CatalogError`] when the document does not
    /// have the expected shape, when two records share an id, when a record's
    /// coordinates are out of range, or when a record's name is empty.
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self, CatalogError> {
        Self::from_json_slice(source_name, json.as_bytes())
    }

    /// Parse and validate a catalog from raw JSON bytes.
    ///
    /// Bytes that are not valid UTF-8 are a malformed resource, like any other
    /// parse failure.
    pub fn from_json_slice(source_name: &str, json: &[u8]) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_slice(json).map_err(|source| CatalogError::Malformed {
                source_name: source_name.to_string(),
                source,
            })?;

        let catalog = Self::from_cities(source_name, file.cities)?;
        tracing::debug!(
            source = %catalog.source_name,
            cities = catalog.len(),
            "loaded city catalog"
        );
        Ok(catalog)
    }

    /// Read a catalog resource from disk and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_json_slice`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&path.display().to_string(), &json)
    }

    /// Validate already-typed records and build the id index.
    fn from_cities(source_name: &str, cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(cities.len());

        for (index, city) in cities.iter().enumerate() {
            if let Err(source) = city.coordinates() {
                return Err(CatalogError::InvalidCoordinates {
                    source_name: source_name.to_string(),
                    id: city.id,
                    source,
                });
            }
            if !city.has_name() {
                return Err(CatalogError::EmptyName {
                    source_name: source_name.to_string(),
                    id: city.id,
                });
            }
            if let Some(first) = by_id.insert(city.id, index) {
                return Err(CatalogError::DuplicateId {
                    source_name: source_name.to_string(),
                    id: city.id,
                    first,
                    second: index,
                });
            }
        }

        Ok(Self {
            source_name: source_name.to_string(),
            cities,
            by_id,
        })
    }

    /// Process-wide catalog built from the bundled resource on first use.
    ///
    /// Later calls return the same instance; it is never rebuilt. A failed
    /// load publishes nothing, so callers see either the complete catalog or
    /// an error.
    pub fn global() -> Result<&'static Catalog, CatalogError> {
        static INSTANCE: OnceLock<Catalog> = OnceLock::new();

        if let Some(catalog) = INSTANCE.get() {
            return Ok(catalog);
        }
        let catalog = load()?;
        Ok(INSTANCE.get_or_init(|| catalog))
    }

    /// Label of the resource this catalog was loaded from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Look up a city by id. `None` means no such city.
    pub fn find_by_id(&self, id: i64) -> Option<&City> {
        self.by_id.get(&id).map(|&index| &self.cities[index])
    }

    /// Whether a city with this id exists.
    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All cities in source order.
    pub fn all(&self) -> &[City] {
        &self.cities
    }

    /// Iterate cities in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities whose name contains `query`, ignoring case and diacritics.
    ///
    /// An empty (or whitespace-only) query matches every city. Results keep
    /// source order.
    pub fn search_by_name(&self, query: &str) -> Vec<&City> {
        let needle = fold_name(query);
        self.cities
            .iter()
            .filter(|city| fold_name(&city.name).contains(&needle))
            .collect()
    }

    /// Serialize back to the resource format (`{"cities": [...]}`).
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&CatalogFileRef {
            cities: &self.cities,
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parse the bundled city resource into a fresh catalog.
///
/// Prefer [`Catalog::global`] inside an application; this always re-parses.
pub fn load() -> Result<Catalog, CatalogError> {
    Catalog::from_json_str(BUNDLED_SOURCE_NAME, BUNDLED_CITIES)
}

/// Free-function form of [`Catalog::find_by_id`].
pub fn find_by_id(catalog: &Catalog, id: i64) -> Option<&City> {
    catalog.find_by_id(id)
}

/// Free-function form of [`Catalog::all`].
pub fn all(catalog: &Catalog) -> &[City] {
    catalog.all()
}
