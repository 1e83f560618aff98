use uuid::Uuid;

use crate::model::entity::{Course, Lesson, Module, ModuleCreate, ModuleUpdate};
use crate::model::{CrudRepository, ModelManager, ResourceTyped};
use crate::service::{ServiceError, ServiceResult, now_utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleInput {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ModuleService {
    mm: ModelManager,
}

impl ModuleService {
    pub fn new(mm: ModelManager) -> Self {
        Self { mm }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self, course_id: Uuid, input: ModuleInput) -> ServiceResult<Module> {
        let course = Course::find_by_id(&self.mm, course_id)
            .await
            .map_err(ServiceError::database(Course::get_resource_type()))?;

        if course.is_none() {
            return Err(ServiceError::not_found(Course::get_resource_type()));
        }

        let data = ModuleCreate {
            course_id,
            title: input.title,
            description: input.description,
            creation_date: now_utc(),
        };

        let module = Module::create(&self.mm, data)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))?;

        tracing::debug!("module {} created in course {}", module.id(), course_id);
        Ok(module)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        course_id: Uuid,
        module_id: Uuid,
        input: ModuleInput,
    ) -> ServiceResult<Module> {
        let found = self.find_one(course_id, module_id).await?;
        let data = ModuleUpdate {
            title: input.title,
            description: input.description,
        };

        found
            .update(&self.mm, data)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, course_id: Uuid, module_id: Uuid) -> ServiceResult<()> {
        let found = self.find_one(course_id, module_id).await?;

        found
            .delete(&self.mm)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))
    }

    /// Module `module_id` only if it belongs to `course_id`.
    pub async fn find_module_into_course(
        &self,
        module_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<Option<Module>> {
        Module::find_in_course(&self.mm, module_id, course_id)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))
    }

    pub async fn find_one(&self, course_id: Uuid, module_id: Uuid) -> ServiceResult<Module> {
        self.find_module_into_course(module_id, course_id)
            .await?
            .ok_or(ServiceError::not_found(Module::get_resource_type()))
    }

    pub async fn find_by_id(&self, module_id: Uuid) -> ServiceResult<Option<Module>> {
        Module::find_by_id(&self.mm, module_id)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))
    }

    pub async fn find_all_by_course(&self, course_id: Uuid) -> ServiceResult<Vec<Module>> {
        Module::all_by_course(&self.mm, course_id)
            .await
            .map_err(ServiceError::database(Module::get_resource_type()))
    }

    /// Lessons contained in `module_id`.
    pub async fn find_lessons_by_module(&self, module_id: Uuid) -> ServiceResult<Vec<Lesson>> {
        Lesson::all_by_module(&self.mm, module_id)
            .await
            .map_err(ServiceError::database(Lesson::get_resource_type()))
    }
}
