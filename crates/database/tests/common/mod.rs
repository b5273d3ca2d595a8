#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use database::{
    db::create_connection,
    entities::{lecture_slot, program, section, session, student, subject, teacher, timetable},
    services::{
        lecture_slot::{LectureSlotInput, LectureSlotService},
        program::{ProgramInput, ProgramService},
        section::{SectionInput, SectionService},
        session::{SessionInput, SessionService},
        student::{StudentInput, StudentService},
        subject::{SubjectInput, SubjectService},
        teacher::{TeacherInput, TeacherService},
        timetable::{TimetableInput, TimetableService},
    },
};
use migration::{Migrator, MigratorTrait};
use models::{day_of_week::DayOfWeek, session_status::SessionStatus};
use sea_orm::{DatabaseConnection, DbErr};

/// Connects to a fresh in-memory database with every migration applied
pub async fn setup() -> Result<DatabaseConnection, DbErr> {
    let db = create_connection("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn program_input(name: &str) -> ProgramInput {
    ProgramInput {
        name: name.to_string(),
        duration_years: 5,
    }
}

pub fn section_input(program_id: uuid::Uuid, year: i32, name: &str) -> SectionInput {
    SectionInput {
        program_id,
        name: name.to_string(),
        year,
    }
}

pub fn subject_input(name: &str) -> SubjectInput {
    SubjectInput {
        name: name.to_string(),
        is_law_subject: true,
        semester: 1,
    }
}

pub fn teacher_input(account_id: &str, email: &str) -> TeacherInput {
    TeacherInput {
        account_id: account_id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: None,
        is_admin: false,
    }
}

pub fn student_input(section_id: uuid::Uuid, roll_number: &str) -> StudentInput {
    StudentInput {
        roll_number: roll_number.to_string(),
        first_name: "Grace".to_string(),
        last_name: Some("Hopper".to_string()),
        email: None,
        phone: None,
        semester: 1,
        section_id,
    }
}

pub fn timetable_input(
    section: &section::Model,
    subject: &subject::Model,
    teacher: Option<&teacher::Model>,
    slot: &lecture_slot::Model,
    day_of_week: DayOfWeek,
) -> TimetableInput {
    TimetableInput {
        section_id: section.id,
        subject_id: subject.id,
        teacher_id: teacher.map(|t| t.id),
        day_of_week,
        lecture_slot_id: slot.id,
        semester_start_date: date(2024, 1, 1),
        semester_end_date: date(2024, 6, 30),
    }
}

/// A program with one section, student, subject, teacher, slot, weekly
/// timetable and one session of that timetable
pub struct Fixture {
    pub program: program::Model,
    pub section: section::Model,
    pub student: student::Model,
    pub subject: subject::Model,
    pub teacher: teacher::Model,
    pub slot: lecture_slot::Model,
    pub timetable: timetable::Model,
    pub session: session::Model,
}

pub async fn fixture(db: &DatabaseConnection) -> Result<Fixture, database::Error> {
    let program = ProgramService::create(db, program_input("BA LLB")).await?;
    let section = SectionService::create(db, section_input(program.id, 1, "A")).await?;
    let student = StudentService::create(db, student_input(section.id, "LLB-001")).await?;
    let subject = SubjectService::create(db, subject_input("Constitutional Law")).await?;
    let teacher = TeacherService::create(db, teacher_input("oidc|ada", "ada@example.edu")).await?;
    let slot = LectureSlotService::create(
        db,
        LectureSlotInput {
            start_time: time(8, 30),
            end_time: time(9, 30),
        },
    )
    .await?;
    let timetable = TimetableService::create(
        db,
        timetable_input(&section, &subject, Some(&teacher), &slot, DayOfWeek::Monday),
    )
    .await?;
    let session = SessionService::create(
        db,
        SessionInput {
            timetable_id: timetable.id,
            date: date(2024, 1, 1),
            status: SessionStatus::Scheduled,
        },
    )
    .await?;

    Ok(Fixture {
        program,
        section,
        student,
        subject,
        teacher,
        slot,
        timetable,
        session,
    })
}
