use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ResourceType;
use crate::model::entity::Lesson;
use crate::service::LessonInput;
use crate::web::dto::{Validate, ValidationErrors};

pub const TITLE_MAX_LEN: usize = 150;
pub const DESCRIPTION_MAX_LEN: usize = 250;

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

impl Validate for LessonDto {
    type Output = LessonInput;

    fn resource_type() -> ResourceType {
        ResourceType::Lesson
    }

    fn validate(self) -> Result<LessonInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = errors.not_blank("title", self.title, TITLE_MAX_LEN);
        let description = errors.not_blank("description", self.description, DESCRIPTION_MAX_LEN);
        let video_url = errors.not_blank("videoUrl", self.video_url, usize::MAX);

        match (title, description, video_url) {
            (Some(title), Some(description), Some(video_url)) if errors.is_empty() => {
                Ok(LessonInput {
                    title,
                    description,
                    video_url,
                })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    pub lesson_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    #[serde(with = "crate::utils::date_format")]
    #[schema(value_type = String, example = "17/10/2026 14:03:00")]
    pub creation_date: DateTime<Utc>,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            lesson_id: lesson.id(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            video_url: lesson.video_url().to_string(),
            creation_date: lesson.creation_date(),
        }
    }
}
