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
pub struct Lesson {
    id: Uuid,
    module_id: Uuid,
    title: String,
    description: String,
    video_url: String,
    creation_date: DateTime<Utc>,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Lesson
    }
}

impl Lesson {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn module_id(&self) -> Uuid {
        self.module_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }
}

#[derive(Debug, Clone)]
pub struct LessonCreate {
    pub module_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub creation_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LessonUpdate {
    pub title: String,
    pub description: String,
    pub video_url: String,
}

#[async_trait]
impl CrudRepository<Lesson, LessonCreate, LessonUpdate, Uuid> for Lesson {
    async fn create(mm: &ModelManager, data: LessonCreate) -> DatabaseResult<Self> {
        let result = sqlx::query("INSERT INTO lessons (id, module_id, title, description, video_url, creation_date) VALUES ($1,$2,$3,$4,$5,$6) RETURNING id")
            .bind(Uuid::new_v4())
            .bind(data.module_id)
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.video_url)
            .bind(data.creation_date)
            .fetch_one(mm.executor())
            .await?;

        let id = result.try_get("id")?;
        Ok(Lesson {
            id,
            module_id: data.module_id,
            title: data.title,
            description: data.description,
            video_url: data.video_url,
            creation_date: data.creation_date,
        })
    }

    async fn update(mut self, mm: &ModelManager, data: LessonUpdate) -> DatabaseResult<Self> {
        let result = sqlx::query("UPDATE lessons SET title = $1, description = $2, video_url = $3 WHERE id = $4")
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.video_url)
            .bind(self.id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }

        self.title = data.title;
        self.description = data.description;
        self.video_url = data.video_url;
        Ok(self)
    }

    async fn delete(self, mm: &ModelManager) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(self.id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }
        Ok(())
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM lessons WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Lesson {
    pub async fn find_in_module(
        mm: &ModelManager,
        lesson_id: Uuid,
        module_id: Uuid,
    ) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM lessons WHERE id = $1 AND module_id = $2")
            .bind(lesson_id)
            .bind(module_id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }

    pub async fn all_by_module(mm: &ModelManager, module_id: Uuid) -> DatabaseResult<Vec<Self>> {
        let result =
            sqlx::query_as("SELECT * FROM lessons WHERE module_id = $1 ORDER BY creation_date")
                .bind(module_id)
                .fetch_all(mm.executor())
                .await?;
        Ok(result)
    }
}
