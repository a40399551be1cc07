#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is a string because challenges are keyed by slug while
    /// generated records are keyed by UUID.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
