//! Request and response shapes. Requests are validated into service inputs
//! through [`Validate`]; responses are built from entities.

mod validation;
pub use validation::{FieldError, Validate, ValidationErrors};

pub mod courses;
pub mod lessons;
pub mod modules;

use serde::{Deserialize, Serialize};

/// Confirmation body for deletions.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}
