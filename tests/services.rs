mod common;
use std::collections::HashSet;

use ead_course::model::entity::{CourseLevel, CourseStatus};
use ead_course::service::{
    CourseInput, CourseService, LessonInput, LessonService, ModuleInput, ModuleService,
    ServiceError,
};
use ead_course::model::entity::{Course, CourseUpdate};
use ead_course::model::{CrudRepository, DatabaseError, ResourceType};
use uuid::Uuid;

use crate::common::setup_test_db;

fn course_input(name: &str) -> CourseInput {
    CourseInput {
        name: name.to_string(),
        description: "Intro".to_string(),
        image_url: None,
        course_status: CourseStatus::InProgress,
        course_level: CourseLevel::Beginner,
        user_instructor: Uuid::new_v4(),
    }
}

fn module_input(title: &str) -> ModuleInput {
    ModuleInput {
        title: title.to_string(),
        description: format!("{title} description"),
    }
}

fn is_not_found(result: &Result<impl std::fmt::Debug, ServiceError>, rt: ResourceType) -> bool {
    matches!(result, Err(ServiceError::NotFound { resource_type }) if *resource_type == rt)
}

#[tokio::test]
async fn course_create_assigns_fresh_ids_and_equal_timestamps() {
    let db = setup_test_db().await;
    let courses = CourseService::new(db.model_manager());

    let mut ids = HashSet::new();
    for i in 0..5 {
        let course = courses.create(course_input(&format!("Course {i}"))).await.unwrap();
        assert_eq!(course.creation_date(), course.last_update_date());
        assert!(ids.insert(course.id()), "duplicate id {}", course.id());
    }

    assert_eq!(courses.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn course_update_is_idempotent_and_advances_timestamp() {
    let db = setup_test_db().await;
    let courses = CourseService::new(db.model_manager());

    let created = courses.create(course_input("Algorithms")).await.unwrap();

    let mut input = course_input("Algorithms II");
    input.course_status = CourseStatus::Finished;
    input.course_level = CourseLevel::Advanced;
    input.image_url = Some("https://img.example/a.png".to_string());

    let first = courses.update(created.id(), input.clone()).await.unwrap();
    let second = courses.update(created.id(), input).await.unwrap();
    let stored = courses.find_by_id(created.id()).await.unwrap();

    for course in [&first, &second, &stored] {
        assert_eq!(course.name(), "Algorithms II");
        assert_eq!(course.course_status(), CourseStatus::Finished);
        assert_eq!(course.course_level(), CourseLevel::Advanced);
        assert_eq!(course.image_url(), Some("https://img.example/a.png"));
        assert_eq!(course.user_instructor(), created.user_instructor());
        assert_eq!(course.creation_date(), created.creation_date());
    }

    assert!(first.last_update_date() >= created.last_update_date());
    assert!(second.last_update_date() >= first.last_update_date());
    assert_eq!(stored.last_update_date(), second.last_update_date());
}

#[tokio::test]
async fn course_missing_id_leaves_store_unmodified() {
    let db = setup_test_db().await;
    let courses = CourseService::new(db.model_manager());

    let existing = courses.create(course_input("Algorithms")).await.unwrap();
    let missing = Uuid::new_v4();

    assert!(is_not_found(&courses.find_by_id(missing).await, ResourceType::Course));
    assert!(is_not_found(
        &courses.update(missing, course_input("Ghost")).await,
        ResourceType::Course
    ));
    assert!(is_not_found(&courses.delete(missing).await, ResourceType::Course));

    let all = courses.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), existing.id());
    assert_eq!(all[0].name(), "Algorithms");
}

#[tokio::test]
async fn course_delete_is_not_idempotent() {
    let db = setup_test_db().await;
    let courses = CourseService::new(db.model_manager());

    let course = courses.create(course_input("Algorithms")).await.unwrap();
    courses.delete(course.id()).await.unwrap();

    assert!(is_not_found(&courses.delete(course.id()).await, ResourceType::Course));
}

#[tokio::test]
async fn find_module_into_course_isolates_courses() {
    let db = setup_test_db().await;
    let mm = db.model_manager();
    let courses = CourseService::new(mm.clone());
    let modules = ModuleService::new(mm);

    let algorithms = courses.create(course_input("Algorithms")).await.unwrap();
    let databases = courses.create(course_input("Databases")).await.unwrap();
    let sorting = modules.create(algorithms.id(), module_input("Sorting")).await.unwrap();

    let own = modules
        .find_module_into_course(sorting.id(), algorithms.id())
        .await
        .unwrap();
    assert_eq!(own.map(|m| m.id()), Some(sorting.id()));

    let foreign = modules
        .find_module_into_course(sorting.id(), databases.id())
        .await
        .unwrap();
    assert!(foreign.is_none());

    assert!(modules.find_all_by_course(databases.id()).await.unwrap().is_empty());
    assert_eq!(modules.find_all_by_course(algorithms.id()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn module_requires_existing_course() {
    let db = setup_test_db().await;
    let modules = ModuleService::new(db.model_manager());

    let result = modules.create(Uuid::new_v4(), module_input("Orphan")).await;
    assert!(is_not_found(&result, ResourceType::Course));
}

#[tokio::test]
async fn lessons_by_module_and_scoped_lookup() {
    let db = setup_test_db().await;
    let mm = db.model_manager();
    let courses = CourseService::new(mm.clone());
    let modules = ModuleService::new(mm.clone());
    let lessons = LessonService::new(mm);

    let course = courses.create(course_input("Algorithms")).await.unwrap();
    let sorting = modules.create(course.id(), module_input("Sorting")).await.unwrap();
    let graphs = modules.create(course.id(), module_input("Graphs")).await.unwrap();

    let lesson = lessons
        .create(
            sorting.id(),
            LessonInput {
                title: "Quicksort".to_string(),
                description: "Partitioning".to_string(),
                video_url: "https://videos.example/quicksort".to_string(),
            },
        )
        .await
        .unwrap();

    let by_module = modules.find_lessons_by_module(sorting.id()).await.unwrap();
    assert_eq!(by_module.len(), 1);
    assert_eq!(by_module[0].id(), lesson.id());
    assert_eq!(by_module[0].module_id(), sorting.id());
    assert!(modules.find_lessons_by_module(graphs.id()).await.unwrap().is_empty());

    assert!(lessons
        .find_lesson_into_module(lesson.id(), graphs.id())
        .await
        .unwrap()
        .is_none());
    assert!(is_not_found(
        &lessons.delete(graphs.id(), lesson.id()).await,
        ResourceType::Lesson
    ));
    assert!(is_not_found(
        &lessons
            .create(
                Uuid::new_v4(),
                LessonInput {
                    title: "Orphan".to_string(),
                    description: "No parent".to_string(),
                    video_url: "https://videos.example/orphan".to_string(),
                },
            )
            .await,
        ResourceType::Module
    ));

    lessons.delete(sorting.id(), lesson.id()).await.unwrap();
    assert!(lessons.find_all_by_module(sorting.id()).await.unwrap().is_empty());
}

#[tokio::test]
async fn stale_course_write_reports_vanished_row() {
    let db = setup_test_db().await;
    let mm = db.model_manager();
    let courses = CourseService::new(mm.clone());

    let created = courses.create(course_input("Algorithms")).await.unwrap();
    let stale = Course::find_by_id(&mm, created.id()).await.unwrap().unwrap();
    courses.delete(created.id()).await.unwrap();

    let update = CourseUpdate {
        name: "Algorithms II".to_string(),
        description: "Intro".to_string(),
        image_url: None,
        course_status: CourseStatus::Finished,
        course_level: CourseLevel::Advanced,
        last_update_date: created.last_update_date(),
    };
    let result = stale.clone().update(&mm, update).await;
    assert!(matches!(result, Err(DatabaseError::NoRowsAffected)));

    let result = stale.delete(&mm).await;
    assert!(matches!(result, Err(DatabaseError::NoRowsAffected)));

    assert!(courses.find_all().await.unwrap().is_empty());
}
