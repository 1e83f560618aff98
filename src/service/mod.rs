//! Orchestration between the web layer and the repositories: parent
//! existence checks, timestamps, delegation.

mod error;
pub use error::{ServiceError, ServiceResult};

mod course;
pub use course::{CourseInput, CourseService};

mod module;
pub use module::{ModuleInput, ModuleService};

mod lesson;
pub use lesson::{LessonInput, LessonService};

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time at the precision postgres stores.
pub(crate) fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
