mod common;

use common::{
    date, fixture, program_input, section_input, setup, student_input, subject_input,
    teacher_input,
};
use database::{
    Error,
    services::{
        attendance::{AttendanceInput, AttendanceService},
        backup::BackupService,
        calendar_exception::{CalendarExceptionInput, CalendarExceptionService},
        program::ProgramService,
        section::SectionService,
        semester::{SemesterInput, SemesterService},
        session::SessionService,
        student::StudentService,
        subject::SubjectService,
        teacher::TeacherService,
        timetable::TimetableService,
    },
};
use models::{session_status::SessionStatus, validation::ValidationError};
use uuid::Uuid;

/// Expect a section to be labelled with its program and year
#[tokio::test]
async fn test_section_label() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let (section, program) = SectionService::get_with_program(&db, fx.section.id)
        .await?
        .unwrap();

    assert_eq!(section.label(&program), "BA LLB - Year 1 - A");
    assert!(SectionService::get_with_program(&db, Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Expect students and subjects to display the way staff refer to them
#[tokio::test]
async fn test_display_forms() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    assert_eq!(fx.student.to_string(), "LLB-001 - Grace Hopper");
    assert_eq!(fx.subject.to_string(), "Constitutional Law");
    assert_eq!(fx.program.to_string(), "BA LLB");

    Ok(())
}

/// Expect timetable entries, sessions and attendance to be labelled through
/// their parents
#[tokio::test]
async fn test_nested_labels() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let timetable = fx.timetable.label(&fx.section.label(&fx.program), &fx.subject, &fx.slot);
    assert_eq!(
        timetable,
        "BA LLB - Year 1 - A - Constitutional Law (Monday 08:30 AM - 09:30 AM)"
    );

    let session = fx.session.label(&timetable);
    assert_eq!(
        session,
        "BA LLB - Year 1 - A - Constitutional Law (Monday 08:30 AM - 09:30 AM) on 2024-01-01 (Scheduled)"
    );

    let mark = AttendanceService::mark(
        &db,
        AttendanceInput {
            student_id: fx.student.id,
            session_id: fx.session.id,
            status: true,
            recorded_by: Some(fx.teacher.id),
            timestamp: None,
        },
    )
    .await?;
    assert_eq!(
        mark.label(&fx.student, &session),
        format!("LLB-001 - Grace Hopper - {session} - Present")
    );

    Ok(())
}

/// Expect a program's sections ordered by year, then name
#[tokio::test]
async fn test_program_sections_ordered() -> Result<(), Error> {
    let db = setup().await?;
    let program = ProgramService::create(&db, program_input("BA LLB")).await?;

    for (year, name) in [(2, "A"), (1, "B"), (1, "A")] {
        SectionService::create(&db, section_input(program.id, year, name)).await?;
    }

    let sections: Vec<_> = ProgramService::sections(&db, program.id)
        .await?
        .into_iter()
        .map(|s| (s.year, s.name))
        .collect();

    assert_eq!(
        sections,
        vec![
            (1, "A".to_string()),
            (1, "B".to_string()),
            (2, "A".to_string())
        ]
    );

    Ok(())
}

/// Expect programs, subjects and students in their default orderings
#[tokio::test]
async fn test_default_orderings() -> Result<(), Error> {
    let db = setup().await?;

    for name in ["LLM", "BA LLB", "BBA LLB"] {
        ProgramService::create(&db, program_input(name)).await?;
    }
    let names: Vec<_> = ProgramService::list(&db)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["BA LLB", "BBA LLB", "LLM"]);

    for name in ["Torts", "Contracts", "Jurisprudence"] {
        SubjectService::create(&db, subject_input(name)).await?;
    }
    let names: Vec<_> = SubjectService::list(&db)
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Contracts", "Jurisprudence", "Torts"]);

    let program = ProgramService::find_by_name(&db, "BA LLB").await?.unwrap();
    let section = SectionService::create(&db, section_input(program.id, 1, "A")).await?;
    for roll in ["LLB-003", "LLB-001", "LLB-002"] {
        StudentService::create(&db, student_input(section.id, roll)).await?;
    }
    let rolls: Vec<_> = SectionService::students(&db, section.id)
        .await?
        .into_iter()
        .map(|s| s.roll_number)
        .collect();
    assert_eq!(rolls, vec!["LLB-001", "LLB-002", "LLB-003"]);

    Ok(())
}

/// Expect updates to replace stored values and report missing rows as None
#[tokio::test]
async fn test_update_program() -> Result<(), Error> {
    let db = setup().await?;
    let program = ProgramService::create(&db, program_input("BA LLB")).await?;

    let mut input = program_input("BA LLB (Hons)");
    input.duration_years = 4;
    let updated = ProgramService::update(&db, program.id, input.clone())
        .await?
        .unwrap();

    assert_eq!(updated.id, program.id);
    assert_eq!(updated.name, "BA LLB (Hons)");
    assert_eq!(updated.duration_years, 4);
    assert!(ProgramService::update(&db, Uuid::new_v4(), input).await?.is_none());

    Ok(())
}

/// Expect an update of a row deleted in the meantime to report None
#[tokio::test]
async fn test_update_after_delete() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    assert!(StudentService::delete(&db, fx.student.id).await?);
    let input = student_input(fx.section.id, "LLB-001");
    assert!(StudentService::update(&db, fx.student.id, input).await?.is_none());
    assert!(StudentService::get(&db, fx.student.id).await?.is_none());

    assert!(SessionService::delete(&db, fx.session.id).await?);
    assert!(
        SessionService::set_status(&db, fx.session.id, SessionStatus::Completed)
            .await?
            .is_none()
    );

    Ok(())
}

/// Expect negative counts to be rejected before anything is stored
#[tokio::test]
async fn test_negative_values_rejected() -> Result<(), Error> {
    let db = setup().await?;

    let mut input = program_input("BA LLB");
    input.duration_years = -1;
    let err = ProgramService::create(&db, input).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::Negative { field: "duration_years" })
    ));
    assert_eq!(err.to_string(), "duration_years must not be negative");
    assert!(ProgramService::list(&db).await?.is_empty());

    let program = ProgramService::create(&db, program_input("BA LLB")).await?;
    let err = SectionService::create(&db, section_input(program.id, -2, "A"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::Negative { field: "year" })));

    let mut subject = subject_input("Torts");
    subject.semester = -1;
    assert!(matches!(
        SubjectService::create(&db, subject).await,
        Err(Error::Validation(_))
    ));

    let section = SectionService::create(&db, section_input(program.id, 1, "A")).await?;
    let student = StudentService::create(&db, student_input(section.id, "LLB-001")).await?;
    let mut input = student_input(section.id, "LLB-001");
    input.semester = -3;
    assert!(matches!(
        StudentService::update(&db, student.id, input).await,
        Err(Error::Validation(_))
    ));
    assert_eq!(StudentService::get(&db, student.id).await?, Some(student));

    let err = SemesterService::create(
        &db,
        SemesterInput {
            semester: -1,
            subject: "Family Law".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::Negative { field: "semester" })));

    Ok(())
}

/// Expect enroll and unenroll to be reflected on both sides of the link
#[tokio::test]
async fn test_enroll_and_unenroll() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    let torts = SubjectService::create(&db, subject_input("Torts")).await?;

    StudentService::enroll(&db, fx.student.id, torts.id).await?;
    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;

    let subjects: Vec<_> = StudentService::subjects(&db, fx.student.id)
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(subjects, vec!["Constitutional Law", "Torts"]);

    let students = SubjectService::students(&db, torts.id).await?;
    assert_eq!(students, vec![fx.student.clone()]);

    assert!(StudentService::unenroll(&db, fx.student.id, torts.id).await?);
    assert!(!StudentService::unenroll(&db, fx.student.id, torts.id).await?);
    assert!(SubjectService::students(&db, torts.id).await?.is_empty());

    Ok(())
}

/// Expect a session status change to be stored and a missing session to yield None
#[tokio::test]
async fn test_set_session_status() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;
    assert_eq!(fx.session.status, SessionStatus::Scheduled);

    let cancelled = SessionService::set_status(&db, fx.session.id, SessionStatus::Cancelled)
        .await?
        .unwrap();
    assert_eq!(cancelled.status, SessionStatus::Cancelled);
    assert_eq!(cancelled.date, fx.session.date);

    // Any status may follow any other
    let scheduled = SessionService::set_status(&db, fx.session.id, SessionStatus::Scheduled)
        .await?
        .unwrap();
    assert_eq!(scheduled.status, SessionStatus::Scheduled);

    assert!(
        SessionService::set_status(&db, Uuid::new_v4(), SessionStatus::Completed)
            .await?
            .is_none()
    );

    Ok(())
}

/// Expect lookups by natural key to find the stored row
#[tokio::test]
async fn test_natural_key_lookups() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let by_email = TeacherService::find_by_email(&db, "ada@example.edu").await?;
    assert_eq!(by_email, Some(fx.teacher.clone()));
    let by_account = TeacherService::find_by_account(&db, "oidc|ada").await?;
    assert_eq!(by_account, Some(fx.teacher.clone()));
    assert!(TeacherService::find_by_account(&db, "oidc|nobody").await?.is_none());

    let session = SessionService::find(&db, fx.timetable.id, date(2024, 1, 1)).await?;
    assert_eq!(session, Some(fx.session.clone()));

    SemesterService::create(
        &db,
        SemesterInput {
            semester: 3,
            subject: "Family Law".to_string(),
        },
    )
    .await?;
    let semester = SemesterService::find_by_number(&db, 3).await?.unwrap();
    assert_eq!(semester.subject, "Family Law");

    CalendarExceptionService::create(
        &db,
        CalendarExceptionInput {
            date: date(2024, 8, 15),
            description: "Independence Day".to_string(),
        },
    )
    .await?;
    let holiday = CalendarExceptionService::find_by_date(&db, date(2024, 8, 15))
        .await?
        .unwrap();
    assert_eq!(holiday.description, "Independence Day");

    Ok(())
}

/// Expect attendance to be visible from both the student and the session
#[tokio::test]
async fn test_attendance_views() -> Result<(), Error> {
    let db = setup().await?;
    let fx = fixture(&db).await?;

    let mark = AttendanceService::mark(
        &db,
        AttendanceInput {
            student_id: fx.student.id,
            session_id: fx.session.id,
            status: false,
            recorded_by: None,
            timestamp: None,
        },
    )
    .await?;
    assert_eq!(mark.status_label(), "Absent");

    let ids = |marks: Vec<database::entities::attendance::Model>| {
        marks.into_iter().map(|m| m.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(StudentService::attendance(&db, fx.student.id).await?), vec![mark.id]);
    assert_eq!(ids(SessionService::attendance(&db, fx.session.id).await?), vec![mark.id]);
    assert_eq!(TimetableService::sessions(&db, fx.timetable.id).await?, vec![fx.session.clone()]);

    Ok(())
}

/// Expect a backup to contain every stored row
#[tokio::test]
async fn test_backup_snapshot() -> Result<(), Error> {
    let db = setup().await?;

    let empty = BackupService::snapshot(&db).await?;
    assert_eq!(empty.row_count(), 0);

    let fx = fixture(&db).await?;
    StudentService::enroll(&db, fx.student.id, fx.subject.id).await?;
    TeacherService::create(&db, teacher_input("oidc|admin", "admin@example.edu")).await?;

    let backup = BackupService::snapshot(&db).await?;

    // program, section, student, subject, 2 teachers, slot, timetable, session, enrollment
    assert_eq!(backup.row_count(), 10);
    assert_eq!(backup.teachers.len(), 2);
    assert_eq!(backup.student_subjects.len(), 1);
    assert_eq!(backup.sessions, vec![fx.session]);

    // The snapshot transaction is finished, so writes go through again
    ProgramService::create(&db, program_input("LLM")).await?;
    assert_eq!(BackupService::snapshot(&db).await?.programs.len(), 2);

    Ok(())
}
