//! `[hatch]` section configuration.
//!
//! Defaults for SVG hatching requests; the section deserializes straight
//! into [`HatchParams`].
//!
//! # Example
//!
//! ```toml
//! [hatch]
//! spacing = 0.7               # Distance between hatch lines (usually the pen width)
//! angle = 45.0
//! cross_hatch = false
//! unit = "mm"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::service::HatchParams;
use crate::size::Unit;

impl HatchParams {
    pub const SPACING: FieldPath = FieldPath::new("hatch.spacing");
    pub const UNIT: FieldPath = FieldPath::new("hatch.unit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.spacing.is_nan() || self.spacing <= 0.0 {
            diag.error(Self::SPACING, format!("must be positive, got {}", self.spacing));
        }

        if self.unit.parse::<Unit>().is_err() {
            let units: Vec<_> = Unit::ALL.iter().map(|u| u.as_str()).collect();
            diag.error_with_hint(
                Self::UNIT,
                format!("unsupported unit `{}`", self.unit),
                format!("expected one of: {}", units.join(", ")),
            );
        }
    }
}
