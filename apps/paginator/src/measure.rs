//! Measurement boundary — frozen block heights handed to the packer.
//!
//! Measuring rendered heights is an environment-dependent concern (a DOM
//! `offsetHeight` read in the web client). The packer only ever sees
//! point-unit numbers collected before it runs, so any [`MeasureProvider`] —
//! including a purely synthetic one in tests — can drive it.

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;
use crate::layout::pack_config::{px_to_points, PackConfig};
use crate::layout::packer::pack;
use crate::layout::print_config::PrintConfig;

// ────────────────────────────────────────────────────────────────────────────
// Measured input types (point units)
// ────────────────────────────────────────────────────────────────────────────

/// One role sub-block with its measured height in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredRole {
    pub role_id: String,
    pub height_pt: f64,
}

/// One experience block: the company-info header height plus the ordered
/// role sub-blocks. Role order is significant and survives into the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredBlock {
    /// Opaque stable identifier. Uniqueness is the measurer's responsibility.
    pub experience_id: String,
    pub header_height_pt: f64,
    pub roles: Vec<MeasuredRole>,
}

// ────────────────────────────────────────────────────────────────────────────
// Raw pixel-unit types (screen measurement dumps)
// ────────────────────────────────────────────────────────────────────────────

/// A role height as dumped from a screen measurement, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeasuredRole {
    pub role_id: String,
    pub height_px: f64,
}

/// An experience block as dumped from a screen measurement, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeasuredBlock {
    pub experience_id: String,
    pub header_height_px: f64,
    pub roles: Vec<RawMeasuredRole>,
}

impl RawMeasuredBlock {
    /// Normalizes pixel heights to points (96 DPI) for the packer.
    pub fn into_points(self) -> MeasuredBlock {
        MeasuredBlock {
            experience_id: self.experience_id,
            header_height_pt: px_to_points(self.header_height_px),
            roles: self
                .roles
                .into_iter()
                .map(|role| MeasuredRole {
                    role_id: role.role_id,
                    height_pt: px_to_points(role.height_px),
                })
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement capability
// ────────────────────────────────────────────────────────────────────────────

/// Source of frozen block measurements.
///
/// Returns `None` when there is no measurable surface — no rendered resume,
/// or zero experiences present. The caller then substitutes the default empty
/// layout instead of invoking the packer.
pub trait MeasureProvider {
    fn measure(&self) -> Option<Vec<MeasuredBlock>>;
}

/// Pre-collected measurements, for replay and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticMeasureProvider {
    blocks: Vec<MeasuredBlock>,
}

impl StaticMeasureProvider {
    pub fn new(blocks: Vec<MeasuredBlock>) -> Self {
        StaticMeasureProvider { blocks }
    }
}

impl MeasureProvider for StaticMeasureProvider {
    fn measure(&self) -> Option<Vec<MeasuredBlock>> {
        if self.blocks.is_empty() {
            None
        } else {
            Some(self.blocks.clone())
        }
    }
}

/// Builds the print configuration for whatever the provider can measure.
///
/// An unmeasurable surface yields the empty "no layout yet" config; actual
/// measurements run through [`pack`].
pub fn build_print_config(
    provider: &dyn MeasureProvider,
    config: &PackConfig,
) -> Result<PrintConfig, LayoutError> {
    match provider.measure() {
        Some(blocks) => pack(&blocks, config),
        None => Ok(PrintConfig::default()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_block_converts_px_to_points() {
        let raw = RawMeasuredBlock {
            experience_id: "exp-a".to_string(),
            header_height_px: 96.0,
            roles: vec![RawMeasuredRole {
                role_id: "r1".to_string(),
                height_px: 48.0,
            }],
        };

        let block = raw.into_points();
        assert!((block.header_height_pt - 72.0).abs() < 1e-9);
        assert!((block.roles[0].height_pt - 36.0).abs() < 1e-9);
        assert_eq!(block.experience_id, "exp-a");
        assert_eq!(block.roles[0].role_id, "r1");
    }

    #[test]
    fn test_empty_provider_yields_default_config() {
        let provider = StaticMeasureProvider::default();
        assert!(provider.measure().is_none(), "no blocks means no surface");

        let config = build_print_config(&provider, &PackConfig::default()).unwrap();
        assert!(config.pages.is_empty());
    }

    #[test]
    fn test_provider_measurements_are_packed() {
        let provider = StaticMeasureProvider::new(vec![MeasuredBlock {
            experience_id: "exp-a".to_string(),
            header_height_pt: 50.0,
            roles: vec![MeasuredRole {
                role_id: "r1".to_string(),
                height_pt: 100.0,
            }],
        }]);

        let config = build_print_config(&provider, &PackConfig::default()).unwrap();
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].contents[0].experience_id, "exp-a");
    }

    #[test]
    fn test_measured_block_serde_camel_case() {
        let json = r#"{"experienceId":"exp-a","headerHeightPt":50.0,"roles":[{"roleId":"r1","heightPt":10.0}]}"#;
        let block: MeasuredBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.experience_id, "exp-a");
        assert_eq!(serde_json::to_string(&block).unwrap(), json);
    }
}
