use thiserror::Error;

use crate::model::{DatabaseError, ResourceType};

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing, or not inside the addressed parent.
    #[error("{resource_type} not found")]
    NotFound { resource_type: ResourceType },

    #[error("{resource_type} store error: {error}")]
    Database {
        resource_type: ResourceType,
        error: DatabaseError,
    },
}

impl ServiceError {
    pub fn not_found(resource_type: ResourceType) -> Self {
        Self::NotFound { resource_type }
    }

    /// A write that hit no row means a concurrent delete won the race.
    pub fn database(resource_type: ResourceType) -> impl FnOnce(DatabaseError) -> Self {
        move |error| match error {
            DatabaseError::NoRowsAffected => Self::NotFound { resource_type },
            error => Self::Database {
                resource_type,
                error,
            },
        }
    }
}
