mod common;

use common::{date, fixture, program_input, section_input, setup, subject_input, teacher_input, timetable_input};
use database::{
    Error,
    services::{
        attendance::{AttendanceInput, AttendanceService},
        calendar_exception::{CalendarExceptionInput, CalendarExceptionService},
        program::ProgramService,
        section::SectionService,
        semester::{SemesterInput, SemesterService},
        session::{SessionInput, SessionService},
        student::StudentService,
        subject::SubjectService,
        teacher::TeacherService,
        timetable::TimetableService,
    },
};
use models::{day_of_week::DayOfWeek, session_status::SessionStatus};

/// Expect a uniqueness violation when a second session is created for the same timetable and date
#[tokio::test]
async fn test_duplicate_session_rejected() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let input = SessionInput {
        timetable_id: fx.timetable.id,
        date: date(2024, 1, 1),
        status: SessionStatus::Scheduled,
    };

    // The fixture already holds a session on 2024-01-01
    let result = SessionService::create(&db, input.clone()).await;
    let err = result.expect_err("second session for the same date must fail");
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    // Another date is fine
    let next_week = SessionService::create(
        &db,
        SessionInput {
            date: date(2024, 1, 8),
            ..input
        },
    )
    .await?;
    assert_eq!(next_week.status, SessionStatus::Scheduled);

    Ok(())
}

/// Expect a student to hold at most one attendance mark per session
#[tokio::test]
async fn test_duplicate_attendance_rejected() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let input = AttendanceInput {
        student_id: fx.student.id,
        session_id: fx.session.id,
        status: true,
        recorded_by: Some(fx.teacher.id),
        timestamp: None,
    };

    let mark = AttendanceService::mark(&db, input.clone()).await?;
    assert_eq!(mark.status_label(), "Present");

    let err = AttendanceService::mark(
        &db,
        AttendanceInput {
            status: false,
            ..input
        },
    )
    .await
    .expect_err("second mark for the same student and session must fail");
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    // The first mark is kept as it was
    let stored = AttendanceService::find(&db, fx.student.id, fx.session.id)
        .await?
        .unwrap();
    assert!(stored.status);
    assert_eq!(SessionService::attendance(&db, fx.session.id).await?.len(), 1);

    Ok(())
}

/// Expect a uniqueness violation on a second timetable row for the same section, subject, day and slot
#[tokio::test]
async fn test_duplicate_timetable_rejected() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let err = TimetableService::create(
        &db,
        timetable_input(&fx.section, &fx.subject, None, &fx.slot, DayOfWeek::Monday),
    )
    .await
    .expect_err("duplicate timetable must fail");
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    // Same slot on another day is a different row
    TimetableService::create(
        &db,
        timetable_input(&fx.section, &fx.subject, None, &fx.slot, DayOfWeek::Wednesday),
    )
    .await?;

    assert_eq!(SectionService::timetables(&db, fx.section.id).await?.len(), 2);

    Ok(())
}

/// Expect a section name to be unique only within its program and year
#[tokio::test]
async fn test_section_unique_per_program_and_year() -> Result<(), Error> {
    let db = setup().await?;
    let llb = ProgramService::create(&db, program_input("BA LLB")).await?;
    let bba = ProgramService::create(&db, program_input("BBA LLB")).await?;

    SectionService::create(&db, section_input(llb.id, 1, "A")).await?;
    SectionService::create(&db, section_input(llb.id, 2, "A")).await?;
    SectionService::create(&db, section_input(bba.id, 1, "A")).await?;

    let err = SectionService::create(&db, section_input(llb.id, 1, "A"))
        .await
        .expect_err("duplicate section must fail");
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    Ok(())
}

/// Expect single-column unique fields to reject duplicates
#[tokio::test]
async fn test_unique_fields_rejected() -> Result<(), Error> {
    let db = setup().await?;

    ProgramService::create(&db, program_input("BA LLB")).await?;
    let err = ProgramService::create(&db, program_input("BA LLB"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    SubjectService::create(&db, subject_input("Torts")).await?;
    let err = SubjectService::create(&db, subject_input("Torts"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    TeacherService::create(&db, teacher_input("oidc|1", "shared@example.edu")).await?;
    let err = TeacherService::create(&db, teacher_input("oidc|2", "shared@example.edu"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    let err = TeacherService::create(&db, teacher_input("oidc|1", "other@example.edu"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    let semester = SemesterInput {
        semester: 1,
        subject: "Foundations".to_string(),
    };
    SemesterService::create(&db, semester.clone()).await?;
    let err = SemesterService::create(&db, semester).await.unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    let holiday = CalendarExceptionInput {
        date: date(2024, 1, 26),
        description: "Republic Day".to_string(),
    };
    CalendarExceptionService::create(&db, holiday.clone()).await?;
    let err = CalendarExceptionService::create(&db, holiday)
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "Error: {err:?}");

    Ok(())
}

/// Expect enrolling the same student in the same subject twice to fail
#[tokio::test]
async fn test_duplicate_enrollment_rejected() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;
    let err = StudentService::enroll(&db, fx.student.id, fx.subject.id)
        .await
        .unwrap_err();

    assert!(err.is_constraint_violation(), "Error: {err:?}");

    Ok(())
}

/// Expect a foreign-key violation when a section points at a missing program
#[tokio::test]
async fn test_section_requires_existing_program() -> Result<(), Error> {
    let db = setup().await?;

    let err = SectionService::create(&db, section_input(uuid::Uuid::new_v4(), 1, "A"))
        .await
        .unwrap_err();

    assert!(err.is_constraint_violation(), "Error: {err:?}");

    Ok(())
}
