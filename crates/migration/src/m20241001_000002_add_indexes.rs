use sea_orm_migration::prelude::*;

use crate::m20241001_000001_create_all_tables::{
    Attendance, Sections, Sessions, StudentSubjects, Students, Timetables,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite uniqueness, enforced by the database
        manager
            .create_index(
                Index::create()
                    .name("uq_sections_program_year_name")
                    .table(Sections::Table)
                    .col(Sections::ProgramId)
                    .col(Sections::Year)
                    .col(Sections::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_timetables_section_subject_day_slot")
                    .table(Timetables::Table)
                    .col(Timetables::SectionId)
                    .col(Timetables::SubjectId)
                    .col(Timetables::DayOfWeek)
                    .col(Timetables::LectureSlotId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_sessions_timetable_date")
                    .table(Sessions::Table)
                    .col(Sessions::TimetableId)
                    .col(Sessions::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_attendance_student_session")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_student_subjects_student_subject")
                    .table(StudentSubjects::Table)
                    .col(StudentSubjects::StudentId)
                    .col(StudentSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Students are listed and searched by roll number and name
        manager
            .create_index(
                Index::create()
                    .name("idx_students_roll_number")
                    .table(Students::Table)
                    .col(Students::RollNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_first_name_last_name")
                    .table(Students::Table)
                    .col(Students::FirstName)
                    .col(Students::LastName)
                    .to_owned(),
            )
            .await?;

        // Foreign key lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_students_section_id")
                    .table(Students::Table)
                    .col(Students::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_subjects_subject_id")
                    .table(StudentSubjects::Table)
                    .col(StudentSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timetables_teacher_id")
                    .table(Timetables::Table)
                    .col(Timetables::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timetables_lecture_slot_id")
                    .table(Timetables::Table)
                    .col(Timetables::LectureSlotId)
                    .to_owned(),
            )
            .await?;

        // Attendance is filtered on every column it carries
        for (name, column) in [
            ("idx_attendance_student_id", Attendance::StudentId),
            ("idx_attendance_session_id", Attendance::SessionId),
            ("idx_attendance_status", Attendance::Status),
            ("idx_attendance_timestamp", Attendance::Timestamp),
            ("idx_attendance_recorded_by", Attendance::RecordedBy),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Attendance::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let indexes = [
            "idx_attendance_recorded_by",
            "idx_attendance_timestamp",
            "idx_attendance_status",
            "idx_attendance_session_id",
            "idx_attendance_student_id",
            "idx_timetables_lecture_slot_id",
            "idx_timetables_teacher_id",
            "idx_student_subjects_subject_id",
            "idx_students_section_id",
            "idx_students_first_name_last_name",
            "idx_students_roll_number",
            "uq_student_subjects_student_subject",
            "uq_attendance_student_session",
            "uq_sessions_timetable_date",
            "uq_timetables_section_subject_day_slot",
            "uq_sections_program_year_name",
        ];

        for name in indexes {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
