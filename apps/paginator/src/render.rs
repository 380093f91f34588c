//! Render-time consumption of a persisted print layout.
//!
//! The print view replays a stored `PrintConfig` instead of remeasuring: for
//! each page it looks up the full experience record behind every content
//! entry and filters that record's roles down to the ids placed on the page.
//! Filtering keeps the record's original role order, not the order the ids
//! appear in `rolesIds`.

use tracing::warn;

use crate::layout::print_config::PrintConfig;
use crate::models::{Experience, Resume, Role};

/// One printed page resolved against full experience records, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub number: u32,
    pub experiences: Vec<Experience>,
}

/// Resolves the resume's persisted print layout into renderable pages.
///
/// Returns `None` when the resume has no stored layout or the stored value
/// fails validation — the caller renders the unpaginated view instead.
pub fn resolve_print_pages(resume: &Resume) -> Option<Vec<RenderedPage>> {
    let value = resume.print_config.as_ref()?;
    let config = PrintConfig::from_value(value)?;
    Some(resolve_pages(&config, &resume.experiences))
}

/// Resolves each page's content records against the experience list.
///
/// Entries referencing an experience that no longer exists (stale layout
/// after a delete) are skipped rather than failing the page.
pub fn resolve_pages(config: &PrintConfig, experiences: &[Experience]) -> Vec<RenderedPage> {
    config
        .pages
        .iter()
        .map(|page| {
            let resolved = page
                .contents
                .iter()
                .filter_map(|content| {
                    let Some(record) = experiences
                        .iter()
                        .find(|e| e.id.to_string() == content.experience_id)
                    else {
                        warn!(
                            experience_id = %content.experience_id,
                            page = page.number,
                            "Print layout references a missing experience; skipping"
                        );
                        return None;
                    };

                    let roles: Vec<Role> = record
                        .roles
                        .iter()
                        .filter(|role| {
                            content.roles_ids.iter().any(|id| id == &role.id.to_string())
                        })
                        .cloned()
                        .collect();

                    Some(Experience {
                        roles,
                        ..record.clone()
                    })
                })
                .collect();

            RenderedPage {
                number: page.number,
                experiences: resolved,
            }
        })
        .collect()
}

/// Formats a role's date range the way the printed view shows it ("Mar 2021").
/// An open-ended role has no end label.
pub fn format_role_dates(role: &Role) -> (String, Option<String>) {
    (
        role.start_date.format("%b %Y").to_string(),
        role.end_date.map(|d| d.format("%b %Y").to_string()),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
