use uuid::Uuid;

use crate::model::entity::{Lesson, LessonCreate, LessonUpdate, Module};
use crate::model::{CrudRepository, ModelManager, ResourceTyped};
use crate::service::{ServiceError, ServiceResult, now_utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LessonInput {
    pub title: String,
    pub description: String,
    pub video_url: String,
}

#[derive(Debug, Clone)]
pub struct LessonService {
    mm: ModelManager,
}

impl LessonService {
    pub fn new(mm: ModelManager) -> Self {
        Self { mm }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, module_id: Uuid, input: LessonInput) -> ServiceResult<Lesson> {
        let module = Module::find_by_id(&self.mm, module_id)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))?;

        if module.is_none() {
            return Err(ServiceError::not_found(Module::get_resource_type()));
        }

        let data = LessonCreate {
            module_id,
            title: input.title,
            description: input.description,
            video_url: input.video_url,
            creation_date: now_utc(),
        };

        let lesson = Lesson::create(&self.mm, data)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))?;

        tracing::debug!("lesson {} created in module {}", lesson.id(), module_id);
        Ok(lesson)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        module_id: Uuid,
        lesson_id: Uuid,
        input: LessonInput,
    ) -> ServiceResult<Lesson> {
        let found = self.find_one(module_id, lesson_id).await?;
        let data = LessonUpdate {
            title: input.title,
            description: input.description,
            video_url: input.video_url,
        };

        found
            .update(&self.mm, data)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, module_id: Uuid, lesson_id: Uuid) -> ServiceResult<()> {
        let found = self.find_one(module_id, lesson_id).await?;

        found
            .delete(&self.mm)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))
    }

    /// Lesson `lesson_id` only if it belongs to `module_id`.
    pub async fn find_lesson_into_module(
        &self,
        lesson_id: Uuid,
        module_id: Uuid,
    ) -> ServiceResult<Option<Lesson>> {
        Lesson::find_in_module(&self.mm, lesson_id, module_id)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))
    }

    pub async fn find_one(&self, module_id: Uuid, lesson_id: Uuid) -> ServiceResult<Lesson> {
        self.find_lesson_into_module(lesson_id, module_id)
            .await?
            .ok_or(ServiceError::not_found(Lesson::get_resource_type()))
    }

    pub async fn find_all_by_module(&self, module_id: Uuid) -> ServiceResult<Vec<Lesson>> {
        Lesson::all_by_module(&self.mm, module_id)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))
    }
}
