//! Print pagination engine for resume print views.
//!
//! Given pre-measured heights of rendered experience blocks, the packer
//! greedily places experience and role identifiers onto fixed-size print
//! pages and emits a `PrintConfig` — a durable record that render-time
//! consumers replay to reconstruct each printed page without remeasuring
//! anything.
//!
//! Measuring heights (a DOM layout read in the web client) and persisting the
//! resulting config are collaborator concerns; see [`measure`] and [`render`]
//! for the two boundaries.

pub mod config;
pub mod errors;
pub mod layout;
pub mod measure;
pub mod models;
pub mod render;

pub use errors::LayoutError;
pub use layout::{pack, px_to_points, PackConfig, PrintConfig, PrintConfigContent, PrintPage};
pub use measure::{build_print_config, MeasureProvider, MeasuredBlock, MeasuredRole};
