// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "sakura-catalog",
    version,
    about = "Browse the bundled city catalog and forecast cherry-blossom dates"
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "SAKURA_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Load cities from this JSON file instead of the bundled catalog
    #[arg(long, env = "SAKURA_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Load forecast models from this JSON file instead of the bundled models
    #[arg(long, env = "SAKURA_MODELS", global = true)]
    pub models: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every city in catalog order
    List,
    /// Show a single city by id
    Show {
        /// City id
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },
    /// Find cities whose name contains the query (case/accent-insensitive)
    Search {
        /// Name fragment
        query: String,
    },
    /// Forecast bloom dates for a city or a raw position
    Forecast {
        /// City id from the catalog
        #[arg(long, conflicts_with_all = ["lat", "lon"], allow_hyphen_values = true)]
        id: Option<i64>,
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<String>,
    },
    /// Print the catalog in its resource format
    Export,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_forecast_with_negative_longitude() {
        let cli = Cli::parse_from([
            "sakura-catalog",
            "forecast",
            "--lat",
            "35.6",
            "--lon",
            "-139.7",
        ]);
        match cli.command {
            Command::Forecast { id, lat, lon } => {
                assert_eq!(id, None);
                assert_eq!(lat.as_deref(), Some("35.6"));
                assert_eq!(lon.as_deref(), Some("-139.7"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn forecast_id_conflicts_with_position() {
        let result = Cli::try_parse_from(["sakura-catalog", "forecast", "--id", "1", "--lat", "3"]);
        assert!(result.is_err());
    }
}
