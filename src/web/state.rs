use crate::model::ModelManager;
use crate::service::{CourseService, LessonService, ModuleService};

/// Services shared by every handler, wired once at start-up.
#[derive(Debug, Clone)]
pub struct AppState {
    courses: CourseService,
    modules: ModuleService,
    lessons: LessonService,
}

impl AppState {
    pub fn new(mm: ModelManager) -> Self {
        Self {
            courses: CourseService::new(mm.clone()),
            modules: ModuleService::new(mm.clone()),
            lessons: LessonService::new(mm),
        }
    }

    pub fn courses(&self) -> &CourseService {
        &self.courses
    }

    pub fn modules(&self) -> &ModuleService {
        &self.modules
    }

    pub fn lessons(&self) -> &LessonService {
        &self.lessons
    }
}
