use chrono::NaiveDate;
use models::day_of_week::DayOfWeek;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recurring weekly class slot for a section, subject and teacher
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = Timetable))]
#[sea_orm(table_name = "timetables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub day_of_week: DayOfWeek,
    /// The lecture slot this class starts in
    pub lecture_slot_id: Uuid,
    pub semester_start_date: NaiveDate,
    pub semester_end_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id",
        on_delete = "Cascade"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::lecture_slot::Entity",
        from = "Column::LectureSlotId",
        to = "super::lecture_slot::Column::Id",
        on_delete = "NoAction"
    )]
    LectureSlot,
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::lecture_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LectureSlot.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Human-readable label, e.g. "BA LLB - Year 1 - A - Torts (Monday 08:30 AM - 09:30 AM)"
    pub fn label(
        &self,
        section_label: &str,
        subject: &super::subject::Model,
        slot: &super::lecture_slot::Model,
    ) -> String {
        format!("{section_label} - {subject} ({} {slot})", self.day_of_week)
    }
}
