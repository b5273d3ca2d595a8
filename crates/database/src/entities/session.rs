use chrono::NaiveDate;
use models::session_status::SessionStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One concrete calendar occurrence of a timetable slot
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = Session))]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub timetable_id: Uuid,
    pub date: NaiveDate,
    pub status: SessionStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timetable::Entity",
        from = "Column::TimetableId",
        to = "super::timetable::Column::Id",
        on_delete = "Cascade"
    )]
    Timetable,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timetable.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.date, self.status)
    }
}

impl Model {
    /// Labels the session with its timetable entry, e.g.
    /// "BA LLB - Year 1 - A - Torts (Monday 08:30 AM - 09:30 AM) on 2024-01-01 (Scheduled)"
    pub fn label(&self, timetable_label: &str) -> String {
        format!("{timetable_label} on {self}")
    }
}
