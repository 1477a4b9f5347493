use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{entity} with id {id} is already complete")]
    AlreadyComplete { entity: &'static str, id: DbId },

    /// A goal that exists but cannot be advanced (zero estimate, counter at
    /// its limit). The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}
