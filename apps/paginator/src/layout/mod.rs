// Print pagination: greedy placement of measured blocks onto fixed-size pages.

pub mod pack_config;
pub mod packer;
pub mod print_config;

// Re-export the public API consumed by other modules (measure, render, main).
pub use pack_config::{px_to_points, PackConfig};
pub use packer::pack;
pub use print_config::{PrintConfig, PrintConfigContent, PrintPage};
