//! Plotify - SVG tooling for pen plotters.
//!
//! | Module       | Purpose                                               |
//! |--------------|-------------------------------------------------------|
//! | `svg`        | Owned SVG tree: parse, serialize, traverse            |
//! | `color`      | Stroke/fill color extraction, projection and removal  |
//! | `provenance` | Content hash stamped into `<metadata>`                |
//! | `size`       | Units and physical plot size inference                |
//! | `display`    | Preview normalization                                 |
//! | `pens`       | Pen registry                                          |
//! | `service`    | Requests to the remote processing service             |
//! | `config`     | `plotify.toml`                                        |
//! | `cli`        | Command-line interface                                |

pub mod cli;
pub mod color;
pub mod config;
pub mod display;
pub mod logger;
pub mod pens;
pub mod provenance;
pub mod service;
pub mod size;
pub mod svg;
pub mod utils;
