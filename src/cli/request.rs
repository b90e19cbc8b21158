//! `request` command: show what would be sent to the processing service.
//!
//! Nothing is sent; the command prints the URL and the multipart parts so a
//! request can be checked or replayed with another HTTP client.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use super::args::RequestArgs;
use super::common::{print_json, read_document};
use crate::config::PlotifyConfig;
use crate::log;
use crate::pens::{FALLBACK_PEN, PenLayer, get_pen, pen_layers};
use crate::service::{
    Endpoint, Image, LayoutParams, PixelartParams, ServiceRequest, VectorizeMode,
    VectorizeParams, assign_pens_request, clean_pixelart_request, depth_lines_request,
    hatch_request, hatch_svg_request, layout_request, pixelart_to_svg_request,
    stroke_colors_to_layers_request, vectorize_request,
};
use crate::size::get_assumed_size;

/// Printable summary of a request.
#[derive(Debug, Serialize)]
struct RequestReport<'a> {
    method: &'static str,
    url: String,
    #[serde(flatten)]
    request: &'a ServiceRequest,
    /// Layer to pen mapping of an `assign-pens` request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pens: Vec<PenLayer>,
}

impl<'a> RequestReport<'a> {
    fn new(url: String, request: &'a ServiceRequest, args: &RequestArgs) -> Self {
        let pens = match args.endpoint {
            Endpoint::AssignPens => pen_layers(&args.pens),
            _ => Vec::new(),
        };
        Self {
            method: "POST",
            url,
            request,
            pens,
        }
    }
}

pub fn run_request(args: &RequestArgs, config: &PlotifyConfig) -> Result<()> {
    let request = build_request(args, config)?;
    let base = config
        .service
        .base_url()
        .with_context(|| format!("invalid service url `{}`", config.service.url))?;
    let report = RequestReport::new(request.url(&base)?.to_string(), &request, args);

    if args.format.json {
        return print_json(&report);
    }

    println!("{} {}", report.method, report.url);
    for part in &request.parts {
        println!(
            "  {}: {} ({}, {} bytes)",
            part.field,
            part.filename,
            part.content_type,
            part.bytes.len()
        );
    }
    for layer in &report.pens {
        println!(
            "  layer {}: {} ({}, {})",
            layer.layer_id, layer.name, layer.color, layer.pen_width
        );
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<Image> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(Image::new(filename, bytes))
}

/// Build the request `args` describe, filling parameters from `config`.
pub fn build_request(args: &RequestArgs, config: &PlotifyConfig) -> Result<ServiceRequest> {
    let file = args.file.as_path();

    let request = match args.endpoint {
        Endpoint::Vectorize => {
            let params = VectorizeParams {
                mode: if args.production {
                    VectorizeMode::Production
                } else {
                    VectorizeMode::Preview
                },
                ..Default::default()
            };
            vectorize_request(read_image(file)?, &params)
        }
        Endpoint::Hatch => hatch_request(read_image(file)?),
        Endpoint::HatchSvg => hatch_svg_request(&read_document(file)?, &config.hatch),
        Endpoint::Layout => {
            let doc = read_document(file)?;
            let params = get_assumed_size(&doc)?
                .and_then(|assumed| LayoutParams::for_size(&assumed))
                .unwrap_or_default();
            crate::debug!("service"; "layout {}mm x {}mm", params.width, params.height);
            layout_request(&doc, &params)
        }
        Endpoint::CleanPixelart => clean_pixelart_request(read_image(file)?),
        Endpoint::PixelartToSvg => {
            pixelart_to_svg_request(read_image(file)?, &PixelartParams::default())
        }
        Endpoint::DepthLines => {
            let Some(mask) = &args.mask else {
                bail!("depth-lines needs a background mask (--mask)");
            };
            depth_lines_request(read_image(file)?, read_image(mask)?)
        }
        Endpoint::StrokeColorsToLayers => stroke_colors_to_layers_request(&read_document(file)?),
        Endpoint::AssignPens => {
            if args.pens.is_empty() {
                bail!("assign-pens needs at least one pen (--pen)");
            }
            for id in args.pens.iter().filter(|id| get_pen(id).is_none()) {
                log!("warning"; "unknown pen `{}`, drawn as {} {}", id, FALLBACK_PEN.color, FALLBACK_PEN.width);
            }
            assign_pens_request(&read_document(file)?, &args.pens)
        }
    };

    Ok(request)
}
