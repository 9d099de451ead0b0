// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line host: loads the catalog at startup and serves one command.

pub mod config;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sakura_catalog::{BloomForecaster, Catalog, City, parse_coordinates};
use tracing_subscriber::EnvFilter;

use self::config::{Cli, Command};

/// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the catalog (failing fast), run the selected command and report an exit code.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let owned;
    let catalog: &Catalog = match &cli.catalog {
        Some(path) => {
            owned = Catalog::from_path(path)
                .with_context(|| format!("Failed to load city catalog {:?}", path))?;
            &owned
        }
        None => Catalog::global().context("Failed to load bundled city catalog")?,
    };
    tracing::info!(
        source = catalog.source_name(),
        cities = catalog.len(),
        "city catalog ready"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let found = execute(&cli, catalog, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute a command against a loaded catalog, writing results to `out`.
///
/// Returns `false` when a requested city does not exist.
fn execute(cli: &Cli, catalog: &Catalog, out: &mut impl Write) -> Result<bool> {
    match &cli.command {
        Command::List => {
            for city in catalog {
                writeln!(out, "{}", format_city(city))?;
            }
        }
        Command::Show { id } => match catalog.find_by_id(*id) {
            Some(city) => writeln!(out, "{}", format_city(city))?,
            None => {
                writeln!(out, "No city with id {id}")?;
                return Ok(false);
            }
        },
        Command::Search { query } => {
            let matches = catalog.search_by_name(query);
            if matches.is_empty() {
                tracing::info!(query = %query, "no cities matched");
            }
            for city in matches {
                writeln!(out, "{}", format_city(city))?;
            }
        }
        Command::Forecast { id, lat, lon } => {
            let forecaster = load_forecaster(cli)?;
            let forecast = match id {
                Some(id) => {
                    let Some(city) = catalog.find_by_id(*id) else {
                        writeln!(out, "No city with id {id}")?;
                        return Ok(false);
                    };
                    forecaster.forecast_city(city)?
                }
                None => {
                    let coords = parse_coordinates(lat.as_deref(), lon.as_deref())
                        .context("Invalid position")?;
                    forecaster.forecast(coords)?
                }
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&forecast)?)?;
        }
        Command::Export => {
            let json = catalog
                .to_json_string()
                .context("Failed to serialize city catalog")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(true)
}

fn load_forecaster(cli: &Cli) -> Result<BloomForecaster> {
    match &cli.models {
        Some(path) => BloomForecaster::from_path(path)
            .with_context(|| format!("Failed to load forecast models {:?}", path)),
        None => BloomForecaster::bundled().context("Failed to load bundled forecast models"),
    }
}

fn format_city(city: &City) -> String {
    format!(
        "{:>4}  {:<16} {:>9.4} {:>10.4}",
        city.id, city.name, city.lat, city.lon
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use sakura_catalog::Catalog;

    use super::config::Cli;
    use super::{execute, format_city};

    fn run_args(args: &[&str], catalog: &Catalog) -> (bool, String) {
        let cli = Cli::parse_from(std::iter::once("sakura-catalog").chain(args.iter().copied()));
        let mut out = Vec::new();
        let found = execute(&cli, catalog, &mut out).unwrap();
        (found, String::from_utf8(out).unwrap())
    }

    fn tokyo_catalog() -> Catalog {
        Catalog::from_json_str(
            "test.json",
            r#"{"cities":[{"id":1,"lat":35.6,"lon":139.7,"name":"Tokyo"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn show_reports_found_and_missing_cities() {
        let catalog = tokyo_catalog();

        let (found, output) = run_args(&["show", "1"], &catalog);
        assert!(found);
        assert_eq!(output.trim_end(), format_city(catalog.find_by_id(1).unwrap()));

        let (found, output) = run_args(&["show", "2"], &catalog);
        assert!(!found);
        assert!(output.contains("No city with id 2"));
    }

    #[test]
    fn list_prints_one_line_per_city() {
        let catalog = Catalog::global().unwrap();
        let (found, output) = run_args(&["list"], catalog);
        assert!(found);
        assert_eq!(output.lines().count(), catalog.len());
    }

    #[test]
    fn export_output_reloads_to_the_same_catalog() {
        let catalog = tokyo_catalog();
        let (_, output) = run_args(&["export"], &catalog);
        let reloaded = Catalog::from_json_str("export", &output).unwrap();
        assert_eq!(reloaded.all(), catalog.all());
    }

    #[test]
    fn forecast_by_position_prints_iso_dates() {
        let catalog = tokyo_catalog();
        let (found, output) = run_args(&["forecast", "--lat", "35.6", "--lon", "139.7"], &catalog);
        assert!(found);

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let kaika = json["kaika_date"].as_str().unwrap();
        assert_eq!(kaika.len(), "2024-03-24".len());
        assert!(kaika.starts_with("2024-"));
    }

    #[test]
    fn forecast_rejects_invalid_positions() {
        let catalog = tokyo_catalog();
        let cli = Cli::parse_from(["sakura-catalog", "forecast", "--lat", "north", "--lon", "139"]);
        let err = execute(&cli, &catalog, &mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("latitude is not a number"));
    }

    #[test]
    fn forecast_uses_model_override_file() {
        let mut models = tempfile::NamedTempFile::new().unwrap();
        models
            .write_all(
                br#"{"base_date":"2025-01-01",
                     "kaika":{"intercept":89.5,"lat":0,"lon":0},
                     "mankai":{"intercept":95.0,"lat":0,"lon":0}}"#,
            )
            .unwrap();
        let path = models.path().to_str().unwrap();

        let (found, output) = run_args(&["--models", path, "forecast", "--id", "1"], &tokyo_catalog());
        assert!(found);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["kaika_date"], "2025-03-31");
        assert_eq!(json["mankai_date"], "2025-04-06");
    }
}
