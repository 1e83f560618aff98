use clap::{Parser, Subcommand};
use ead_course::model::{DbConnection, ModelManager};
use ead_course::service::{CourseService, LessonService, ModuleService};
use ead_course::web::dto::courses::CourseDto;
use ead_course::web::dto::lessons::LessonDto;
use ead_course::web::dto::modules::ModuleDto;
use ead_course::web::dto::{Validate, ValidationErrors};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the course catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
        /// NOT_STARTED, IN_PROGRESS or FINISHED
        #[arg(long, default_value = "NOT_STARTED")]
        status: String,
        /// BEGINNER, INTERMEDIATE or ADVANCED
        #[arg(long, default_value = "BEGINNER")]
        level: String,
        #[arg(long)]
        instructor: Uuid,
    },
    List,
}

/// Module management
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        #[arg(long)]
        course_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Print a module together with its lessons
    Show {
        #[arg(long)]
        id: Uuid,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        module_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        video_url: String,
    },
}

/// Runs the same checks as the HTTP layer, exiting on invalid arguments.
fn validated<T: Validate>(dto: T) -> T::Output {
    match dto.validate() {
        Ok(input) => input,
        Err(errors) => report_invalid(errors),
    }
}

fn report_invalid(errors: ValidationErrors) -> ! {
    for error in errors.errors() {
        eprintln!("--{}: {}", error.field, error.message);
    }
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> ead_course::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set");
        std::process::exit(2);
    };

    let db_con = DbConnection::connect(&database_url)?;
    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::Course { action } => {
            let courses = CourseService::new(mm);
            match action {
                CourseCommands::Add {
                    name,
                    description,
                    image_url,
                    status,
                    level,
                    instructor,
                } => {
                    let input = validated(CourseDto {
                        name: Some(name),
                        description: Some(description),
                        image_url,
                        course_status: Some(status),
                        user_instructor: Some(instructor),
                        course_level: Some(level),
                    });
                    let course = courses.create(input).await?;
                    println!("Course created: {:?}", course);
                }
                CourseCommands::List => {
                    for course in courses.find_all().await? {
                        println!(
                            "{}  {}  [{} / {}]",
                            course.id(),
                            course.name(),
                            course.course_status(),
                            course.course_level()
                        );
                    }
                }
            }
        }

        Commands::Module { action } => {
            let modules = ModuleService::new(mm);
            match action {
                ModuleCommands::Add {
                    course_id,
                    title,
                    description,
                } => {
                    let input = validated(ModuleDto {
                        title: Some(title),
                        description: Some(description),
                    });
                    let module = modules.create(course_id, input).await?;
                    println!("Module created: {:?}", module);
                }
                ModuleCommands::Show { id } => {
                    let Some(module) = modules.find_by_id(id).await? else {
                        eprintln!("Module {} not found", id);
                        std::process::exit(1);
                    };

                    println!("{}  {} (course {})", module.id(), module.title(), module.course_id());
                    for lesson in modules.find_lessons_by_module(id).await? {
                        println!("  - {}  {}  {}", lesson.id(), lesson.title(), lesson.video_url());
                    }
                }
            }
        }

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                module_id,
                title,
                description,
                video_url,
            } => {
                let input = validated(LessonDto {
                    title: Some(title),
                    description: Some(description),
                    video_url: Some(video_url),
                });
                let lesson = LessonService::new(mm).create(module_id, input).await?;
                println!("Lesson created: {:?}", lesson);
            }
        },
    }

    Ok(())
}
