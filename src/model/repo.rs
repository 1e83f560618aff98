use std::fmt;

use crate::model::{ModelManager, error::DatabaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Course,
    Module,
    Lesson,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => write!(f, "Course"),
            Self::Module => write!(f, "Module"),
            Self::Lesson => write!(f, "Lesson"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Row-level persistence for one table.
///
/// `Create` carries everything the row needs at insert time (parent id,
/// timestamps), `Update` only the replaceable columns. Ownership columns
/// are never part of `Update`. `update` and `delete` fail with
/// [`crate::model::DatabaseError::NoRowsAffected`] once the row is gone.
#[async_trait::async_trait]
pub trait CrudRepository<T, Create, Update, V>
where
    T: ResourceTyped,
    V: Clone + Copy,
{
    async fn create(mm: &ModelManager, data: Create) -> DatabaseResult<T>;

    async fn update(self, mm: &ModelManager, data: Update) -> DatabaseResult<T>
    where
        Self: Sized;

    async fn delete(self, mm: &ModelManager) -> DatabaseResult<()>
    where
        Self: Sized;

    async fn find_by_id(mm: &ModelManager, id: V) -> DatabaseResult<Option<T>>;
}
