//! Command-line interface module.

mod args;
pub mod common;
pub mod edit;
pub mod inspect;
pub mod request;

pub use args::{Cli, Commands, FormatArgs, OutputArgs, RequestArgs};

use anyhow::Result;

use crate::config::PlotifyConfig;

/// Run the parsed command against the loaded configuration.
pub fn run(cli: &Cli, config: &PlotifyConfig) -> Result<()> {
    match &cli.command {
        Commands::Colors { file, fill, format } => inspect::run_colors(file, *fill, *format),
        Commands::Layers { file, format } => inspect::run_layers(file, *format),
        Commands::Size { file, format } => inspect::run_size(file, *format),
        Commands::Project { file, output } => edit::run_project(file, output),
        Commands::RemoveFill {
            file,
            color,
            output,
        } => edit::run_remove_fill(file, color, output),
        Commands::Stamp { file, output } => edit::run_stamp(file, output).map(|_| ()),
        Commands::Preview {
            file,
            max_height,
            output,
        } => edit::run_preview(file, max_height.as_deref(), output.as_ref(), config),
        Commands::Request { args } => request::run_request(args, config),
        Commands::Pens { format } => inspect::run_pens(*format),
    }
}
