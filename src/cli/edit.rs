//! Rewriting commands: `project`, `remove-fill`, `stamp`, `preview`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::args::OutputArgs;
use super::common::{output_path, plural_count, read_document, write_document};
use crate::color::{remove_fill_color, set_stroke_to_fill_color};
use crate::config::PlotifyConfig;
use crate::display::set_svg_display_attributes;
use crate::log;
use crate::provenance::update_svg_metadata_with_hash;

pub fn run_project(file: &Path, output: &OutputArgs) -> Result<()> {
    let mut doc = read_document(file)?;
    set_stroke_to_fill_color(&mut doc);

    let dest = output_path(file, output.output.as_ref());
    write_document(&doc, &dest)?;
    log!("svg"; "projected fills onto strokes: {}", dest.display());
    Ok(())
}

pub fn run_remove_fill(file: &Path, color: &str, output: &OutputArgs) -> Result<()> {
    let mut doc = read_document(file)?;
    let removed = remove_fill_color(&mut doc, color);
    let dest = output_path(file, output.output.as_ref());
    write_document(&doc, &dest)?;
    log!(
        "svg";
        "removed {} filled with {}: {}",
        plural_count(removed, "element"),
        color,
        dest.display()
    );
    Ok(())
}

/// Stamp the provenance hash; returns it.
pub fn run_stamp(file: &Path, output: &OutputArgs) -> Result<String> {
    let mut doc = read_document(file)?;
    let Some(hash) = update_svg_metadata_with_hash(&mut doc) else {
        bail!("{} has no <svg> root element", file.display());
    };

    let dest = output_path(file, output.output.as_ref());
    write_document(&doc, &dest)?;
    println!("{hash}");
    Ok(hash)
}

pub fn run_preview(
    file: &Path,
    max_height: Option<&str>,
    output: Option<&PathBuf>,
    config: &PlotifyConfig,
) -> Result<()> {
    let doc = read_document(file)?;
    let max_height = max_height.unwrap_or(&config.preview.max_height);
    let preview = set_svg_display_attributes(&doc, max_height);

    match output {
        Some(dest) => {
            write_document(&preview, dest)?;
            log!("svg"; "preview written to {}", dest.display());
        }
        None => println!("{preview}"),
    }
    Ok(())
}
