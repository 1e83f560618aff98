use std::fmt;
use std::str::FromStr;

use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager,
    error::{DatabaseError, DatabaseResult},
    repo::CrudRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::prelude::Row;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected one of {expected}, got `{got}`")]
pub struct ParseEnumError {
    expected: &'static str,
    got: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[sqlx(type_name = "course_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl CourseStatus {
    const VARIANTS: &'static str = "NOT_STARTED, IN_PROGRESS, FINISHED";
}

impl FromStr for CourseStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "FINISHED" => Ok(Self::Finished),
            _ => Err(ParseEnumError {
                expected: Self::VARIANTS,
                got: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NOT_STARTED"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[sqlx(type_name = "course_level", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    const VARIANTS: &'static str = "BEGINNER, INTERMEDIATE, ADVANCED";
}

impl FromStr for CourseLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(Self::Beginner),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "ADVANCED" => Ok(Self::Advanced),
            _ => Err(ParseEnumError {
                expected: Self::VARIANTS,
                got: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "BEGINNER"),
            Self::Intermediate => write!(f, "INTERMEDIATE"),
            Self::Advanced => write!(f, "ADVANCED"),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    id: Uuid,
    name: String,
    description: String,
    image_url: Option<String>,
    course_status: CourseStatus,
    course_level: CourseLevel,
    user_instructor: Uuid,
    creation_date: DateTime<Utc>,
    last_update_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub course_status: CourseStatus,
    pub course_level: CourseLevel,
    pub user_instructor: Uuid,
    pub creation_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CourseUpdate {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub course_status: CourseStatus,
    pub course_level: CourseLevel,
    pub last_update_date: DateTime<Utc>,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Course
    }
}

impl Course {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn course_status(&self) -> CourseStatus {
        self.course_status
    }

    pub fn course_level(&self) -> CourseLevel {
        self.course_level
    }

    pub fn user_instructor(&self) -> Uuid {
        self.user_instructor
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn last_update_date(&self) -> DateTime<Utc> {
        self.last_update_date
    }
}

#[async_trait]
impl CrudRepository<Course, CourseCreate, CourseUpdate, Uuid> for Course {
    async fn create(mm: &ModelManager, data: CourseCreate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses
                (id, name, description, image_url, course_status, course_level,
                 user_instructor, creation_date, last_update_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.course_status)
        .bind(data.course_level)
        .bind(data.user_instructor)
        .bind(data.creation_date)
        .bind(data.last_update_date)
        .fetch_one(mm.executor())
        .await?;

        let id = result.try_get("id")?;
        Ok(Course {
            id,
            name: data.name,
            description: data.description,
            image_url: data.image_url,
            course_status: data.course_status,
            course_level: data.course_level,
            user_instructor: data.user_instructor,
            creation_date: data.creation_date,
            last_update_date: data.last_update_date,
        })
    }

    async fn update(mut self, mm: &ModelManager, data: CourseUpdate) -> DatabaseResult<Self> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET name = $1, description = $2, image_url = $3, course_status = $4,
                course_level = $5, last_update_date = $6
            WHERE id = $7
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.course_status)
        .bind(data.course_level)
        .bind(data.last_update_date)
        .bind(self.id)
        .execute(mm.executor())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }

        self.name = data.name;
        self.description = data.description;
        self.image_url = data.image_url;
        self.course_status = data.course_status;
        self.course_level = data.course_level;
        self.last_update_date = data.last_update_date;
        Ok(self)
    }

    async fn delete(self, mm: &ModelManager) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(self.id)
            .execute(mm.executor())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected);
        }
        Ok(())
    }

    async fn find_by_id(mm: &ModelManager, id: Uuid) -> DatabaseResult<Option<Self>> {
        let result = sqlx::query_as("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(mm.executor())
            .await?;
        Ok(result)
    }
}

impl Course {
    pub async fn list(mm: &ModelManager) -> DatabaseResult<Vec<Self>> {
        let result = sqlx::query_as("SELECT * FROM courses ORDER BY creation_date")
            .fetch_all(mm.executor())
            .await?;
        Ok(result)
    }
}
