//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::service::Endpoint;

/// Plotify SVG tooling for pen plotters
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: plotify.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the distinct stroke (or fill) colors of an SVG
    #[command(visible_alias = "c")]
    Colors {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// List fill colors instead of stroke colors
        #[arg(short, long)]
        fill: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show the stroke color of each top-level layer group
    #[command(visible_alias = "l")]
    Layers {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Infer the plot size an SVG was authored for
    Size {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Copy every fill color onto the stroke of the same element
    #[command(visible_alias = "p")]
    Project {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Remove every element filled with the given color
    RemoveFill {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Fill color to remove, as written in the SVG (e.g. `#ff0000`)
        color: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Stamp the content hash into the SVG metadata
    #[command(visible_alias = "s")]
    Stamp {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a display-normalized copy for on-screen previews
    Preview {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// CSS max-height of the preview (default: [preview] max_height)
        #[arg(long)]
        max_height: Option<String>,

        /// Write to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show the service request that would be sent for a file
    #[command(visible_alias = "r")]
    Request {
        #[command(flatten)]
        args: RequestArgs,
    },

    /// List the known pens
    Pens {
        #[command(flatten)]
        format: FormatArgs,
    },
}

/// Output format for inspection commands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct FormatArgs {
    /// Print JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Destination of commands that rewrite an SVG.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write to file instead of overwriting the input
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Request command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RequestArgs {
    /// Service endpoint (e.g. hatch-svg, layout, assign-pens)
    pub endpoint: Endpoint,

    /// Input SVG or image
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Background mask image (depth-lines)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub mask: Option<PathBuf>,

    /// Pen per layer, in layer order (assign-pens)
    #[arg(long = "pen", value_delimiter = ',')]
    pub pens: Vec<String>,

    /// Request the final SVG instead of a raster preview (vectorize)
    #[arg(long)]
    pub production: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}
