//! Named plot sizes.
//!
//! These are the usable plot areas of the supported paper formats, not the
//! ISO paper dimensions.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    /// Registry key (`a4`).
    pub name: &'static str,
    /// Display label (`A4`).
    pub label: &'static str,
    pub description: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperSize {
    /// `(width, height)` in millimeters for the given orientation.
    pub fn dimensions(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Portrait => (self.width_mm, self.height_mm),
            Orientation::Landscape => (self.height_mm, self.width_mm),
        }
    }
}

/// Registry in match priority order.
pub static SIZES: [PaperSize; 3] = [
    PaperSize {
        name: "a3",
        label: "A3",
        description: "A3 size (371mm x 525mm)",
        width_mm: 371.0,
        height_mm: 525.0,
    },
    PaperSize {
        name: "a4",
        label: "A4",
        description: "A4 size (264mm x 373mm)",
        width_mm: 264.0,
        height_mm: 373.0,
    },
    PaperSize {
        name: "a5",
        label: "A5",
        description: "A5 size (186.5mm x 264mm)",
        width_mm: 186.5,
        height_mm: 264.0,
    },
];

/// Look up a size by registry key.
pub fn get_size(name: &str) -> Option<&'static PaperSize> {
    SIZES.iter().find(|size| size.name == name)
}

pub fn all_sizes() -> &'static [PaperSize] {
    &SIZES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_values() {
        let a4 = get_size("a4").unwrap();
        assert_eq!((a4.width_mm, a4.height_mm), (264.0, 373.0));
        assert_eq!(get_size("a5").unwrap().width_mm, 186.5);
        assert_eq!(get_size("a3").unwrap().height_mm, 525.0);
        assert!(get_size("A4").is_none());
        assert!(get_size("letter").is_none());
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = all_sizes().iter().map(|s| s.name).collect();
        assert_eq!(names, ["a3", "a4", "a5"]);
    }

    #[test]
    fn test_dimensions_by_orientation() {
        let a5 = get_size("a5").unwrap();
        assert_eq!(a5.dimensions(Orientation::Portrait), (186.5, 264.0));
        assert_eq!(a5.dimensions(Orientation::Landscape), (264.0, 186.5));
    }
}
