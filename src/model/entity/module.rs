use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager,
    error::{DatabaseError, DatabaseResult},
    repo::CrudRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Module {
    id: Uuid,
    course_id: Uuid,
    title: String,
    description: String,
    creation_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ModuleCreate {
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ModuleUpdate {
    pub title: String,
    pub description: String,
}

impl ResourceTyped for Module {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Module
    }
}

impl Module {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }
}

#[async_trait]
impl CrudRepository<Module, ModuleCreate, ModuleUpdate, Uuid> for Module {
    async fn create(mm: &ModelManager, data: ModuleCreate) -> DatabaseResult<Self> {
        let result = sqlx::query("INSERT INTO modules (id, course_id, title, description, creation_date) VALUES ($1,$2,$3,$4,$5) RETURNING id")
            .bind(Uuid::new_v4())
            .bind(data.course_id)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.creation_date)
            .fetch_one(mm.executor())
            .await?;

        let id = result.try_get("id")?;
        Ok(Module {
            id,
            course_id: data.course_id,
            title: data.title,
            description: data.description,
            creation_date: data.creation_date,
        })
    }

    async fn update(mut self, mm: &ModelManager, data: ModuleUpdate) -> DatabaseResult<Self> {
        let result = sqlx::query("UPDATE modules SET title = $1, description = $2 WHERE id = $3")
            .bind(&data.title)
            .bind(&data.description)
            .bind(self.id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }

        self.title = data.title;
        self.description = data.description;
        Ok(self)
    }

    async fn delete(self, mm: &ModelManager) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(self.id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }
        Ok(())
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM modules WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Module {
    /// Both predicates go to the database, so a module of another course
    /// is indistinguishable from a missing one.
    pub async fn find_in_course(
        mm: &ModelManager,
        module_id: Uuid,
        course_id: Uuid,
    ) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM modules WHERE id = $1 AND course_id = $2")
            .bind(module_id)
            .bind(course_id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }

    pub async fn all_by_course(mm: &ModelManager, course_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let result =
            sqlx::query_as("SELECT * FROM modules WHERE course_id = $1 ORDER BY creation_date")
                .bind(course_id)
                .fetch_all(mm.executor())
                .await?;
        Ok(result)
    }
}
