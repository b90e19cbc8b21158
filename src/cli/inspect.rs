//! Read-only commands: `colors`, `layers`, `size`, `pens`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::FormatArgs;
use super::common::{plural_count, print_json, read_document};
use crate::color::{get_colors, get_fill_colors, get_layer_colors};
use crate::log;
use crate::pens::{PENS, Pen};
use crate::size::{AssumedSize, get_assumed_size};

pub fn run_colors(file: &Path, fill: bool, format: FormatArgs) -> Result<()> {
    let doc = read_document(file)?;
    let colors = if fill {
        get_fill_colors(&doc)
    } else {
        get_colors(&doc)
    };

    if format.json {
        return print_json(&colors);
    }

    let kind = if fill { "fill color" } else { "stroke color" };
    log!("svg"; "{} in {}", plural_count(colors.len(), kind), file.display());
    for color in &colors {
        println!("{color}");
    }
    Ok(())
}

pub fn run_layers(file: &Path, format: FormatArgs) -> Result<()> {
    let doc = read_document(file)?;
    let layers = get_layer_colors(&doc);

    if format.json {
        return print_json(&layers);
    }

    log!("svg"; "{} with a stroke color", plural_count(layers.len(), "layer"));
    for (index, color) in &layers {
        println!("{index}\t{color}");
    }
    Ok(())
}

/// Size report; `size` is null when nothing matched.
#[derive(Debug, Serialize)]
struct SizeReport<'a> {
    file: String,
    #[serde(flatten)]
    assumed: Option<AssumedSize>,
    label: Option<&'a str>,
}

pub fn run_size(file: &Path, format: FormatArgs) -> Result<()> {
    let doc = read_document(file)?;
    let assumed = get_assumed_size(&doc)
        .with_context(|| format!("cannot infer size of {}", file.display()))?;

    if format.json {
        let report = SizeReport {
            file: file.display().to_string(),
            assumed,
            label: assumed.and_then(|a| a.paper()).map(|paper| paper.label),
        };
        return print_json(&report);
    }

    match assumed.as_ref().and_then(|a| Some((a, a.paper()?))) {
        Some((assumed, paper)) => {
            let (width, height) = paper.dimensions(assumed.orientation);
            log!("size"; "{} {} ({}mm x {}mm)", paper.label, assumed.orientation, width, height);
        }
        None => log!("size"; "no matching plot size for {}", file.display()),
    }
    Ok(())
}

pub fn run_pens(format: FormatArgs) -> Result<()> {
    if format.json {
        return print_json(&PENS[..]);
    }

    for Pen { id, color, width } in &PENS {
        println!("{id:<22}{color:<10}{width}");
    }
    Ok(())
}
