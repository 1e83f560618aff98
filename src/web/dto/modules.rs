use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ResourceType;
use crate::model::entity::Module;
use crate::service::ModuleInput;
use crate::web::dto::{Validate, ValidationErrors};

pub const TITLE_MAX_LEN: usize = 150;
pub const DESCRIPTION_MAX_LEN: usize = 250;

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Validate for ModuleDto {
    type Output = ModuleInput;

    fn resource_type() -> ResourceType {
        ResourceType::Module
    }

    fn validate(self) -> Result<ModuleInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = errors.not_blank("title", self.title, TITLE_MAX_LEN);
        let description = errors.not_blank("description", self.description, DESCRIPTION_MAX_LEN);

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => {
                Ok(ModuleInput { title, description })
            }
            _ => Err(errors),
        }
    }
}

/// The owning course is write-only: it comes from the path and is not echoed.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub module_id: Uuid,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
}

impl From<Module> for ModuleResponse {
    fn from(module: Module) -> Self {
        Self {
            module_id: module.id(),
            title: module.title().to_string(),
            description: module.description().to_string(),
            creation_date: module.creation_date(),
        }
    }
}
