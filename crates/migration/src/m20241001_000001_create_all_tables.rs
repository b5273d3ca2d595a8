use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create semesters table
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Semesters::Semester)
                            .integer()
                            .not_null()
                            .unique_key()
                            .check(Expr::col(Semesters::Semester).gte(0)),
                    )
                    .col(ColumnDef::new(Semesters::Subject).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        // Create programs table
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Programs::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Programs::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Programs::DurationYears)
                            .integer()
                            .not_null()
                            .check(Expr::col(Programs::DurationYears).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sections table
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sections::ProgramId).uuid().not_null())
                    .col(ColumnDef::new(Sections::Name).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Sections::Year)
                            .integer()
                            .not_null()
                            .check(Expr::col(Sections::Year).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sections-program_id")
                            .from(Sections::Table, Sections::ProgramId)
                            .to(Programs::Table, Programs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create subjects table
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Subjects::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::IsLawSubject)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Subjects::Semester)
                            .integer()
                            .not_null()
                            .check(Expr::col(Subjects::Semester).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Teachers::AccountId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Teachers::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string_len(15))
                    .col(
                        ColumnDef::new(Teachers::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::RollNumber).string_len(20).not_null())
                    .col(ColumnDef::new(Students::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Students::LastName).string_len(50))
                    .col(ColumnDef::new(Students::Email).string_len(254))
                    .col(ColumnDef::new(Students::Phone).string_len(15))
                    .col(
                        ColumnDef::new(Students::Semester)
                            .integer()
                            .not_null()
                            .check(Expr::col(Students::Semester).gte(0)),
                    )
                    .col(ColumnDef::new(Students::SectionId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-section_id")
                            .from(Students::Table, Students::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_subjects junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(StudentSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSubjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentSubjects::StudentId).uuid().not_null())
                    .col(ColumnDef::new(StudentSubjects::SubjectId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_subjects-student_id")
                            .from(StudentSubjects::Table, StudentSubjects::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_subjects-subject_id")
                            .from(StudentSubjects::Table, StudentSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lecture_slots table. The end-after-start rule is checked by
        // the application, not by the database.
        manager
            .create_table(
                Table::create()
                    .table(LectureSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LectureSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LectureSlots::StartTime).time().not_null())
                    .col(ColumnDef::new(LectureSlots::EndTime).time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create timetables table
        manager
            .create_table(
                Table::create()
                    .table(Timetables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timetables::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Timetables::SectionId).uuid().not_null())
                    .col(ColumnDef::new(Timetables::SubjectId).uuid().not_null())
                    .col(ColumnDef::new(Timetables::TeacherId).uuid())
                    .col(ColumnDef::new(Timetables::DayOfWeek).string_len(9).not_null())
                    .col(ColumnDef::new(Timetables::LectureSlotId).uuid().not_null())
                    .col(
                        ColumnDef::new(Timetables::SemesterStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Timetables::SemesterEndDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetables-section_id")
                            .from(Timetables::Table, Timetables::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetables-subject_id")
                            .from(Timetables::Table, Timetables::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetables-teacher_id")
                            .from(Timetables::Table, Timetables::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetables-lecture_slot_id")
                            .from(Timetables::Table, Timetables::LectureSlotId)
                            .to(LectureSlots::Table, LectureSlots::Id)
                            // NO ACTION keeps a slot from being deleted while a timetable uses it
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sessions table
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sessions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sessions::TimetableId).uuid().not_null())
                    .col(ColumnDef::new(Sessions::Date).date().not_null())
                    .col(
                        ColumnDef::new(Sessions::Status)
                            .string_len(10)
                            .not_null()
                            .default("Scheduled"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sessions-timetable_id")
                            .from(Sessions::Table, Sessions::TimetableId)
                            .to(Timetables::Table, Timetables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create attendance table
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Attendance::SessionId).uuid().not_null())
                    .col(
                        ColumnDef::new(Attendance::Status)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Attendance::Timestamp).date_time().not_null())
                    .col(ColumnDef::new(Attendance::RecordedBy).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance-student_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance-session_id")
                            .from(Attendance::Table, Attendance::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance-recorded_by")
                            .from(Attendance::Table, Attendance::RecordedBy)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create calendar_exceptions table
        manager
            .create_table(
                Table::create()
                    .table(CalendarExceptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarExceptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CalendarExceptions::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CalendarExceptions::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CalendarExceptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Timetables::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LectureSlots::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentSubjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Semesters {
    Table,
    Id,
    Semester,
    Subject,
}

#[derive(Iden)]
pub(crate) enum Programs {
    Table,
    Id,
    Name,
    DurationYears,
}

#[derive(Iden)]
pub(crate) enum Sections {
    Table,
    Id,
    ProgramId,
    Name,
    Year,
}

#[derive(Iden)]
enum Subjects {
    Table,
    Id,
    Name,
    IsLawSubject,
    Semester,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    AccountId,
    FirstName,
    LastName,
    Email,
    Phone,
    IsAdmin,
}

#[derive(Iden)]
pub(crate) enum Students {
    Table,
    Id,
    RollNumber,
    FirstName,
    LastName,
    Email,
    Phone,
    Semester,
    SectionId,
}

#[derive(Iden)]
pub(crate) enum StudentSubjects {
    Table,
    Id,
    StudentId,
    SubjectId,
}

#[derive(Iden)]
enum LectureSlots {
    Table,
    Id,
    StartTime,
    EndTime,
}

#[derive(Iden)]
pub(crate) enum Timetables {
    Table,
    Id,
    SectionId,
    SubjectId,
    TeacherId,
    DayOfWeek,
    LectureSlotId,
    SemesterStartDate,
    SemesterEndDate,
}

#[derive(Iden)]
pub(crate) enum Sessions {
    Table,
    Id,
    TimetableId,
    Date,
    Status,
}

#[derive(Iden)]
pub(crate) enum Attendance {
    Table,
    Id,
    StudentId,
    SessionId,
    Status,
    Timestamp,
    RecordedBy,
}

#[derive(Iden)]
enum CalendarExceptions {
    Table,
    Id,
    Date,
    Description,
}
