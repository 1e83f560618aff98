use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ResourceType;
use crate::model::entity::{Course, CourseLevel, CourseStatus};
use crate::service::CourseInput;
use crate::web::dto::{Validate, ValidationErrors};

pub const NAME_MAX_LEN: usize = 150;
pub const DESCRIPTION_MAX_LEN: usize = 250;

/// Body of course create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[schema(example = "Algorithms")]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// One of `NOT_STARTED`, `IN_PROGRESS`, `FINISHED`
    #[schema(example = "IN_PROGRESS")]
    pub course_status: Option<String>,
    pub user_instructor: Option<Uuid>,
    /// One of `BEGINNER`, `INTERMEDIATE`, `ADVANCED`
    #[schema(example = "BEGINNER")]
    pub course_level: Option<String>,
}

impl Validate for CourseDto {
    type Output = CourseInput;

    fn resource_type() -> ResourceType {
        ResourceType::Course
    }

    fn validate(self) -> Result<CourseInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.not_blank("name", self.name, NAME_MAX_LEN);
        let description = errors.not_blank("description", self.description, DESCRIPTION_MAX_LEN);
        let course_status = errors.member::<CourseStatus>("courseStatus", self.course_status);
        let user_instructor = errors.required("userInstructor", self.user_instructor);
        let course_level = errors.member::<CourseLevel>("courseLevel", self.course_level);
        let image_url = errors.optional("imageUrl", self.image_url);

        match (name, description, course_status, user_instructor, course_level) {
            (
                Some(name),
                Some(description),
                Some(course_status),
                Some(user_instructor),
                Some(course_level),
            ) if errors.is_empty() => Ok(CourseInput {
                name,
                description,
                image_url,
                course_status,
                course_level,
                user_instructor,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub course_status: CourseStatus,
    pub course_level: CourseLevel,
    pub user_instructor: Uuid,
    pub creation_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            course_id: course.id(),
            name: course.name().to_string(),
            description: course.description().to_string(),
            image_url: course.image_url().map(str::to_string),
            course_status: course.course_status(),
            course_level: course.course_level(),
            user_instructor: course.user_instructor(),
            creation_date: course.creation_date(),
            last_update_date: course.last_update_date(),
        }
    }
}
