//! Configuration section definitions.
//!
//! | Section     | File         | Purpose                         |
//! |-------------|--------------|---------------------------------|
//! | `[preview]` | `preview.rs` | Preview normalization           |
//! | `[service]` | `service.rs` | Processing service root URL     |
//! | `[hatch]`   | `hatch.rs`   | Default hatching parameters     |

mod hatch;
mod preview;
mod service;

pub use preview::PreviewConfig;
pub use service::ServiceConfig;
