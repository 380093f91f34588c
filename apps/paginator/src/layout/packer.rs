//! Pagination pass — greedily packs measured experience blocks into pages.
//!
//! # Algorithm
//! Single forward pass, no lookahead, no rebalancing: each placement decision
//! depends only on the running `available_height` carried from earlier blocks,
//! so the first pass is authoritative and final. A company header never splits
//! across pages, and its height is charged again on every continuation page an
//! experience's roles spill onto.
//!
//! Heights must already be in points; see `pack_config::px_to_points` for the
//! screen-pixel conversion.

use tracing::debug;

use crate::errors::LayoutError;
use crate::layout::pack_config::PackConfig;
use crate::layout::print_config::{PrintConfig, PrintConfigContent, PrintPage};
use crate::measure::MeasuredBlock;

/// Packs measured experience blocks into print pages.
///
/// Returns zero pages for empty input — "nothing measured yet" is distinct
/// from "measured and it all fits on page 1".
///
/// # Errors
/// [`LayoutError::MissingExperienceId`] / [`LayoutError::MissingRoleId`] when
/// a block or role arrives without a stable identifier. No other validation is
/// performed: zero or negative heights are accepted and simply never trigger
/// the overflow branch on their own.
pub fn pack(blocks: &[MeasuredBlock], config: &PackConfig) -> Result<PrintConfig, LayoutError> {
    if blocks.is_empty() {
        return Ok(PrintConfig::default());
    }

    let mut done: Vec<PrintPage> = Vec::new();
    let mut current = new_page(1, config);

    for block in blocks {
        if block.experience_id.is_empty() {
            return Err(LayoutError::MissingExperienceId);
        }

        // The header never splits: if it doesn't fit, move to a fresh page.
        // A header taller than a fresh page still lands there (no second
        // check) and drives the height negative; the first role then forces
        // an immediate split.
        if current.available_height < block.header_height_pt {
            open_page(&mut done, &mut current, config);
        }
        current.available_height -= block.header_height_pt;

        let mut entry = new_entry(&block.experience_id);

        for role in &block.roles {
            if role.role_id.is_empty() {
                return Err(LayoutError::MissingRoleId {
                    experience_id: block.experience_id.clone(),
                });
            }

            if current.available_height < role.height_pt {
                let placed = std::mem::replace(&mut entry, new_entry(&block.experience_id));
                if !placed.roles_ids.is_empty() {
                    current.contents.push(placed);
                }
                open_page(&mut done, &mut current, config);
                // Continuation pages are charged the header height again,
                // even though the header is not re-rendered there.
                current.available_height -= block.header_height_pt;
            }

            entry.roles_ids.push(role.role_id.clone());
            current.available_height -= role.height_pt;
        }

        // An experience with zero placed roles contributes no content record,
        // even though its header consumed height.
        if !entry.roles_ids.is_empty() {
            current.contents.push(entry);
        }
    }

    done.push(current);

    debug!(
        pages = done.len(),
        blocks = blocks.len(),
        "Packed experience blocks into print pages"
    );

    Ok(PrintConfig { pages: done })
}

fn new_page(number: u32, config: &PackConfig) -> PrintPage {
    PrintPage {
        number,
        available_height: config.page_height(number),
        available_width: config.page_width(),
        contents: Vec::new(),
    }
}

fn new_entry(experience_id: &str) -> PrintConfigContent {
    PrintConfigContent {
        experience_id: experience_id.to_string(),
        roles_ids: Vec::new(),
    }
}

/// Finishes `current` and replaces it with the next numbered page.
fn open_page(done: &mut Vec<PrintPage>, current: &mut PrintPage, config: &PackConfig) {
    let next = new_page(current.number + 1, config);
    done.push(std::mem::replace(current, next));
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
