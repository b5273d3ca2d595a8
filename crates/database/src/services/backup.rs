use crate::{
    entities::{
        attendance, calendar_exception, lecture_slot, program, section, semester, session,
        student, student_subject, subject, teacher, timetable,
    },
    error::Error,
};
use chrono::{NaiveDateTime, Utc};
use futures::try_join;
use log::info;
use sea_orm::{AccessMode, DatabaseConnection, EntityTrait, IsolationLevel, TransactionTrait};
use serde::{Deserialize, Serialize};

/// Full copy of every table, taken for administrative backups
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Backup {
    pub created_at: NaiveDateTime,
    pub semesters: Vec<semester::Model>,
    pub programs: Vec<program::Model>,
    pub sections: Vec<section::Model>,
    pub subjects: Vec<subject::Model>,
    pub teachers: Vec<teacher::Model>,
    pub students: Vec<student::Model>,
    pub student_subjects: Vec<student_subject::Model>,
    pub lecture_slots: Vec<lecture_slot::Model>,
    pub timetables: Vec<timetable::Model>,
    pub sessions: Vec<session::Model>,
    pub attendance: Vec<attendance::Model>,
    pub calendar_exceptions: Vec<calendar_exception::Model>,
}

impl Backup {
    /// Total number of rows across all tables
    pub fn row_count(&self) -> usize {
        self.semesters.len()
            + self.programs.len()
            + self.sections.len()
            + self.subjects.len()
            + self.teachers.len()
            + self.students.len()
            + self.student_subjects.len()
            + self.lecture_slots.len()
            + self.timetables.len()
            + self.sessions.len()
            + self.attendance.len()
            + self.calendar_exceptions.len()
    }
}

pub struct BackupService;

impl BackupService {
    /// Reads every table into a single [`Backup`], inside one read-only
    /// transaction so all tables come from the same point in time
    pub async fn snapshot(db: &DatabaseConnection) -> Result<Backup, Error> {
        let txn = db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
            .await?;

        let (
            semesters,
            programs,
            sections,
            subjects,
            teachers,
            students,
            student_subjects,
            lecture_slots,
            timetables,
            sessions,
            attendance,
            calendar_exceptions,
        ) = try_join!(
            semester::Entity::find().all(&txn),
            program::Entity::find().all(&txn),
            section::Entity::find().all(&txn),
            subject::Entity::find().all(&txn),
            teacher::Entity::find().all(&txn),
            student::Entity::find().all(&txn),
            student_subject::Entity::find().all(&txn),
            lecture_slot::Entity::find().all(&txn),
            timetable::Entity::find().all(&txn),
            session::Entity::find().all(&txn),
            attendance::Entity::find().all(&txn),
            calendar_exception::Entity::find().all(&txn),
        )?;
        txn.commit().await?;

        let backup = Backup {
            created_at: Utc::now().naive_utc(),
            semesters,
            programs,
            sections,
            subjects,
            teachers,
            students,
            student_subjects,
            lecture_slots,
            timetables,
            sessions,
            attendance,
            calendar_exceptions,
        };
        info!("Took backup of {} rows", backup.row_count());

        Ok(backup)
    }
}
