//! Query parameters of the service endpoints.
//!
//! Defaults mirror what the editor sends when the user leaves a setting
//! alone.

use serde::{Deserialize, Serialize};

use super::request::ServiceRequest;

/// Floats are sent in their debug form so whole numbers keep the `.0`
/// (`45.0`) the service has always received.
fn float(value: f64) -> String {
    format!("{value:?}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorizeMode {
    /// Raster preview of the quantized colors.
    #[default]
    Preview,
    /// Final SVG.
    Production,
}

impl VectorizeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            VectorizeMode::Preview => "preview",
            VectorizeMode::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizeParams {
    pub mode: VectorizeMode,
    pub max_colors: u32,
    pub remove_whites: bool,
}

impl Default for VectorizeParams {
    fn default() -> Self {
        Self {
            mode: VectorizeMode::Preview,
            max_colors: 8,
            remove_whites: true,
        }
    }
}

impl VectorizeParams {
    pub(super) fn apply(&self, request: ServiceRequest) -> ServiceRequest {
        request
            .query("mode", self.mode.as_str())
            .query("max_colors", self.max_colors)
            .query("remove_whites", self.remove_whites)
    }
}

/// Hatching of an SVG's filled shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchParams {
    /// Distance between hatch lines; usually the pen width.
    pub spacing: f64,
    pub angle: f64,
    pub hold_back_steps: f64,
    pub cross_hatch: bool,
    pub reduce_pen_lifts: bool,
    pub hold_back_hatch_from_edges: bool,
    pub scope: f64,
    pub tolerance: f64,
    pub unit: String,
}

impl Default for HatchParams {
    fn default() -> Self {
        Self {
            spacing: 0.7,
            angle: 45.0,
            hold_back_steps: 0.0,
            cross_hatch: false,
            reduce_pen_lifts: false,
            hold_back_hatch_from_edges: false,
            scope: 3.0,
            tolerance: 20.0,
            unit: "mm".to_string(),
        }
    }
}

impl HatchParams {
    pub(super) fn apply(&self, request: ServiceRequest) -> ServiceRequest {
        request
            .query("hatch_spacing", float(self.spacing))
            .query("hatch_angle", float(self.angle))
            .query("hold_back_steps", float(self.hold_back_steps))
            .query("cross_hatch", self.cross_hatch)
            .query("reduce_pen_lifts", self.reduce_pen_lifts)
            .query("hold_back_hatch_from_edges", self.hold_back_hatch_from_edges)
            .query("hatch_scope", float(self.scope))
            .query("tolerance", float(self.tolerance))
            .query("unit", &self.unit)
    }
}

/// Page layout in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub landscape: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
            landscape: false,
        }
    }
}

impl LayoutParams {
    /// Page size of an inferred plot size, with the orientation folded into
    /// width and height.
    pub fn for_size(assumed: &crate::size::AssumedSize) -> Option<Self> {
        let (width, height) = assumed.paper()?.dimensions(assumed.orientation);
        Some(Self {
            width,
            height,
            ..Self::default()
        })
    }

    pub(super) fn apply(&self, request: ServiceRequest) -> ServiceRequest {
        request
            .query("width", self.width)
            .query("height", self.height)
            .query("margin", self.margin)
            .query("landscape", self.landscape)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelartParams {
    pub pen_width: f64,
    /// Upsampling factor.
    pub upsample: u32,
}

impl Default for PixelartParams {
    fn default() -> Self {
        Self {
            pen_width: 1.0,
            upsample: 8,
        }
    }
}

impl PixelartParams {
    /// Width of one source pixel in the output drawing.
    pub fn pixel_width(&self) -> f64 {
        f64::from(self.upsample) * self.pen_width / 1.25
    }

    pub(super) fn apply(&self, request: ServiceRequest) -> ServiceRequest {
        request
            .query("pen_width", self.pen_width)
            .query("u", self.upsample)
    }
}

/// Color count used when cleaning pixel art.
pub const CLEAN_PIXELART_COLORS: u32 = 16;
