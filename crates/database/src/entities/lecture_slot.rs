use chrono::NaiveTime;
use models::lecture_slot::{format_slot, validate_slot_times};
use sea_orm::{ActiveValue, Value, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = LectureSlot))]
#[sea_orm(table_name = "lecture_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timetable::Entity")]
    Timetables,
}

impl Related<super::timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timetables.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Refuses to persist a slot that does not end after it starts, whichever
    /// write path the model came through
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let (Some(start), Some(end)) = (value_of(&self.start_time), value_of(&self.end_time)) {
            validate_slot_times(*start, *end).map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        Ok(self)
    }
}

fn value_of<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", format_slot(self.start_time, self.end_time))
    }
}
