mod common;

use common::{fixture, setup};
use database::{
    Error,
    entities::{attendance, section, session, student, student_subject, timetable},
    services::{
        attendance::{AttendanceInput, AttendanceService},
        lecture_slot::LectureSlotService,
        program::ProgramService,
        student::StudentService,
        subject::SubjectService,
        teacher::TeacherService,
        timetable::TimetableService,
    },
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

async fn mark_present(db: &DatabaseConnection, fx: &common::Fixture) -> Result<attendance::Model, Error> {
    AttendanceService::mark(
        db,
        AttendanceInput {
            student_id: fx.student.id,
            session_id: fx.session.id,
            status: true,
            recorded_by: Some(fx.teacher.id),
            timestamp: None,
        },
    )
    .await
}

/// Expect deleting a program to remove everything that hangs off it
#[tokio::test]
async fn test_delete_program_cascades() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;
    mark_present(&db, &fx).await?;

    assert!(ProgramService::delete(&db, fx.program.id).await?);

    assert_eq!(section::Entity::find().count(&db).await?, 0);
    assert_eq!(student::Entity::find().count(&db).await?, 0);
    assert_eq!(student_subject::Entity::find().count(&db).await?, 0);
    assert_eq!(timetable::Entity::find().count(&db).await?, 0);
    assert_eq!(session::Entity::find().count(&db).await?, 0);
    assert_eq!(attendance::Entity::find().count(&db).await?, 0);

    // Shared records are not owned by the program
    assert!(SubjectService::get(&db, fx.subject.id).await?.is_some());
    assert!(TeacherService::get(&db, fx.teacher.id).await?.is_some());
    assert!(LectureSlotService::get(&db, fx.slot.id).await?.is_some());

    Ok(())
}

/// Expect deleting a subject to remove its timetables, sessions, attendance and enrollments
#[tokio::test]
async fn test_delete_subject_cascades() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;
    mark_present(&db, &fx).await?;

    assert!(SubjectService::delete(&db, fx.subject.id).await?);

    assert_eq!(timetable::Entity::find().count(&db).await?, 0);
    assert_eq!(session::Entity::find().count(&db).await?, 0);
    assert_eq!(attendance::Entity::find().count(&db).await?, 0);
    assert!(StudentService::subjects(&db, fx.student.id).await?.is_empty());
    assert!(StudentService::get(&db, fx.student.id).await?.is_some());

    Ok(())
}

/// Expect deleting a student to remove only their own attendance and enrollments
#[tokio::test]
async fn test_delete_student_cascades() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;
    mark_present(&db, &fx).await?;

    assert!(StudentService::delete(&db, fx.student.id).await?);

    assert_eq!(attendance::Entity::find().count(&db).await?, 0);
    assert_eq!(student_subject::Entity::find().count(&db).await?, 0);
    assert_eq!(session::Entity::find().count(&db).await?, 1);

    Ok(())
}

/// Expect deleting a teacher to keep the timetable and attendance rows with the reference cleared
#[tokio::test]
async fn test_delete_teacher_clears_references() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    let mark = mark_present(&db, &fx).await?;
    assert_eq!(fx.timetable.teacher_id, Some(fx.teacher.id));

    assert!(TeacherService::delete(&db, fx.teacher.id).await?);

    let timetable = TimetableService::get(&db, fx.timetable.id).await?.unwrap();
    assert_eq!(timetable.teacher_id, None);

    let mark = AttendanceService::get(&db, mark.id).await?.unwrap();
    assert_eq!(mark.recorded_by, None);
    assert!(mark.status);

    Ok(())
}

/// Expect a lecture slot that a timetable still uses to be protected from deletion
#[tokio::test]
async fn test_delete_referenced_slot_rejected() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let err = LectureSlotService::delete(&db, fx.slot.id)
        .await
        .expect_err("slot in use must not be deleted");
    assert!(err.is_constraint_violation(), "Error: {err:?}");
    assert!(LectureSlotService::get(&db, fx.slot.id).await?.is_some());

    // Once the timetable is gone the slot can go too
    assert!(TimetableService::delete(&db, fx.timetable.id).await?);
    assert!(LectureSlotService::delete(&db, fx.slot.id).await?);

    Ok(())
}

/// Expect deleting a missing row to report false rather than fail
#[tokio::test]
async fn test_delete_missing_returns_false() -> Result<(), Error> {
    let db = setup().await?;

    assert!(!ProgramService::delete(&db, uuid::Uuid::new_v4()).await?);
    assert!(!StudentService::delete(&db, uuid::Uuid::new_v4()).await?);

    Ok(())
}
