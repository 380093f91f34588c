use thiserror::Error;

/// Errors surfaced by the pagination engine.
///
/// A missing identifier is a precondition violation — the measurement
/// collaborator must guarantee every block and role carries a stable id
/// before the packer runs. No partial layout is produced.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Experience ID not found")]
    MissingExperienceId,

    #[error("Role ID not found (experience {experience_id})")]
    MissingRoleId { experience_id: String },
}
