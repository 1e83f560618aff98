mod course;
pub use course::{Course, CourseCreate, CourseLevel, CourseStatus, CourseUpdate, ParseEnumError};

mod module;
pub use module::{Module, ModuleCreate, ModuleUpdate};

mod lesson;
pub use lesson::{Lesson, LessonCreate, LessonUpdate};
