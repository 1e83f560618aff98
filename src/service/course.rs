use uuid::Uuid;

use crate::model::entity::{Course, CourseCreate, CourseLevel, CourseStatus, CourseUpdate};
use crate::model::{CrudRepository, ModelManager, ResourceTyped};
use crate::service::{ServiceError, ServiceResult, now_utc};

/// Validated course fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInput {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub course_status: CourseStatus,
    pub course_level: CourseLevel,
    pub user_instructor: Uuid,
}

#[derive(Debug, Clone)]
pub struct CourseService {
    mm: ModelManager,
}

impl CourseService {
    pub fn new(mm: ModelManager) -> Self {
        Self { mm }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, input: CourseInput) -> ServiceResult<Course> {
        let now = now_utc();
        let data = CourseCreate {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            course_status: input.course_status,
            course_level: input.course_level,
            user_instructor: input.user_instructor,
            creation_date: now,
            last_update_date: now,
        };

        let course = Course::create(&self.mm, data)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))?;

        tracing::debug!("course {} created", course.id());
        Ok(course)
    }

    /// Full replacement of the mutable fields. The instructor set at
    /// creation is kept.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: Uuid, input: CourseInput) -> ServiceResult<Course> {
        let found = self.find_by_id(id).await?;

        let data = CourseUpdate {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            course_status: input.course_status,
            course_level: input.course_level,
            last_update_date: now_utc().max(found.last_update_date()),
        };

        found
            .update(&self.mm, data)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let found = self.find_by_id(id).await?;

        found
            .delete(&self.mm)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))?;

        tracing::debug!("course {} deleted", id);
        Ok(())
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Course>> {
        Course::list(&self.mm)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))
    }

    pub async fn find_by_id(&self, id: Uuid) -> ServiceResult<Course> {
        Course::find_by_id(&self.mm, id)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))?
            .ok_or(ServiceError::not_found(Course::get_resource_type()))
    }
}
