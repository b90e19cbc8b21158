//! Plotify - SVG tooling for pen plotters.

use clap::{ColorChoice, Parser};
use plotify::cli::{self, Cli};
use plotify::config::PlotifyConfig;
use plotify::logger;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let result =
        PlotifyConfig::load(cli.config.as_deref()).and_then(|config| cli::run(&cli, &config));

    if let Err(err) = result {
        logger::log_error(&err);
        std::process::exit(1);
    }
}
