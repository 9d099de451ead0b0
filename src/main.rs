mod app;

use std::process::ExitCode;

use clap::Parser;

use crate::app::config::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    app::init_logging(&cli.log_level);
    app::run(cli)
}
