use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A serialized list value that does not decode, either read back
    /// from a column or submitted by a client.
    #[error("Malformed {column} value: {detail}")]
    Malformed {
        column: &'static str,
        detail: String,
    },
}
