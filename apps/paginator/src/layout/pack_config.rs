//! Pack geometry — paper dimensions, padding, and per-page capacity.
//!
//! All values are in points (1/72 inch). Pixel measurements coming from a
//! screen must go through [`px_to_points`] (96 DPI assumption) before any of
//! the packing arithmetic sees them.

use serde::{Deserialize, Serialize};

/// Geometry inputs for a pagination pass.
///
/// `paper_height_pt` is a configured constant tuned for the print CSS, not a
/// physical A4 height — do not "correct" it to 841.89.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackConfig {
    pub paper_width_pt: f64,
    pub paper_height_pt: f64,
    /// Space reserved on page 1 for the resume header and intro, which render
    /// outside the packer's accounting.
    pub first_page_height_reduction_pt: f64,
    /// Subtracted twice (top and bottom) from every page.
    pub page_padding_pt: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        PackConfig {
            paper_width_pt: 210.276, // 210mm in points
            paper_height_pt: 1200.89,
            first_page_height_reduction_pt: 250.0,
            page_padding_pt: 20.0,
        }
    }
}

impl PackConfig {
    /// Usable vertical space on the given 1-based page, before any content
    /// is placed. Page 1 is smaller: it also hosts the header/intro block.
    pub fn page_height(&self, page_number: u32) -> f64 {
        if page_number == 1 {
            self.paper_height_pt - self.first_page_height_reduction_pt - self.page_padding_pt * 2.0
        } else {
            self.paper_height_pt - self.page_padding_pt * 2.0
        }
    }

    /// Usable horizontal space. Constant across pages; recorded for
    /// downstream consumers but never decremented by the packing pass.
    pub fn page_width(&self) -> f64 {
        self.paper_width_pt - self.page_padding_pt * 2.0
    }
}

/// Converts a pixel height to points, assuming the default 96 DPI for screens.
pub fn px_to_points(px: f64) -> f64 {
    px * 72.0 / 96.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
