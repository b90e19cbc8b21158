//! Endpoints of the processing service and their request builders.

use std::fmt;
use std::str::FromStr;

use crate::color::set_stroke_to_fill_color;
use crate::svg::Document;

use super::params::{
    HatchParams, LayoutParams, PixelartParams, VectorizeParams, CLEAN_PIXELART_COLORS,
};
use super::request::{Part, ServiceRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Vectorize,
    Hatch,
    HatchSvg,
    Layout,
    CleanPixelart,
    PixelartToSvg,
    DepthLines,
    StrokeColorsToLayers,
    AssignPens,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Vectorize,
        Endpoint::Hatch,
        Endpoint::HatchSvg,
        Endpoint::Layout,
        Endpoint::CleanPixelart,
        Endpoint::PixelartToSvg,
        Endpoint::DepthLines,
        Endpoint::StrokeColorsToLayers,
        Endpoint::AssignPens,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Vectorize => "vectorize",
            Endpoint::Hatch => "hatch",
            Endpoint::HatchSvg => "hatch-svg",
            Endpoint::Layout => "layout",
            Endpoint::CleanPixelart => "clean-pixelart",
            Endpoint::PixelartToSvg => "pixelart-to-svg",
            Endpoint::DepthLines => "depth-lines",
            Endpoint::StrokeColorsToLayers => "stroke-colors-to-layers",
            Endpoint::AssignPens => "assign-pens",
        }
    }

    /// Path relative to the service root.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Vectorize => "api/vectorize",
            Endpoint::Hatch => "api/hatch",
            Endpoint::HatchSvg => "api/hatch-svg",
            Endpoint::Layout => "api/layout",
            Endpoint::CleanPixelart => "api/clean-pixelart",
            Endpoint::PixelartToSvg => "api/pixelart-to-svg",
            Endpoint::DepthLines => "api/depth-lines",
            Endpoint::StrokeColorsToLayers => "api/stroke-colors-to-layers",
            Endpoint::AssignPens => "api/assign-pens",
        }
    }

    pub fn request(self) -> ServiceRequest {
        ServiceRequest::new(self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Endpoint::ALL.iter().map(|e| e.name()).collect();
                format!("unknown endpoint `{s}`, expected one of: {}", names.join(", "))
            })
    }
}

/// A raster image to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn content_type(&self) -> &'static str {
        let ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

    fn into_part(self, field: &'static str) -> Part {
        let content_type = self.content_type();
        Part::new(field, self.filename, content_type, self.bytes)
    }
}

fn svg_part(doc: &Document) -> Part {
    Part::svg("file", doc.to_bytes())
}

pub fn vectorize_request(image: Image, params: &VectorizeParams) -> ServiceRequest {
    params.apply(Endpoint::Vectorize.request().part(image.into_part("file")))
}

pub fn hatch_request(image: Image) -> ServiceRequest {
    Endpoint::Hatch.request().part(image.into_part("file"))
}

/// Hatching request for `doc` with strokes projected from fills.
///
/// The projection runs on a copy; `doc` is left as it was.
pub fn hatch_svg_request(doc: &Document, params: &HatchParams) -> ServiceRequest {
    let mut projected = doc.clone();
    set_stroke_to_fill_color(&mut projected);
    params.apply(Endpoint::HatchSvg.request().part(svg_part(&projected)))
}

pub fn layout_request(doc: &Document, params: &LayoutParams) -> ServiceRequest {
    params.apply(Endpoint::Layout.request().part(svg_part(doc)))
}

pub fn clean_pixelart_request(image: Image) -> ServiceRequest {
    Endpoint::CleanPixelart
        .request()
        .part(image.into_part("file"))
        .query("num_colors", CLEAN_PIXELART_COLORS)
}

pub fn pixelart_to_svg_request(image: Image, params: &PixelartParams) -> ServiceRequest {
    params.apply(Endpoint::PixelartToSvg.request().part(image.into_part("file")))
}

/// Depth line drawing from a photo and its background-removed mask.
pub fn depth_lines_request(image: Image, mask: Image) -> ServiceRequest {
    Endpoint::DepthLines
        .request()
        .part(image.into_part("image"))
        .part(mask.into_part("mask"))
}

pub fn stroke_colors_to_layers_request(doc: &Document) -> ServiceRequest {
    Endpoint::StrokeColorsToLayers.request().part(svg_part(doc))
}

/// Pen assignment; `pen_ids[i]` draws layer `i + 1`.
pub fn assign_pens_request<S: AsRef<str>>(doc: &Document, pen_ids: &[S]) -> ServiceRequest {
    pen_ids.iter().fold(
        Endpoint::AssignPens.request().part(svg_part(doc)),
        |request, id| request.query("pen_ids", id.as_ref()),
    )
}
