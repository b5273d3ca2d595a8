use super::{delete_by_id, updated};
use crate::{
    entities::{session, timetable},
    error::Error,
};
use chrono::NaiveDate;
use log::debug;
use models::day_of_week::DayOfWeek;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimetableInput {
    pub section_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub day_of_week: DayOfWeek,
    pub lecture_slot_id: Uuid,
    pub semester_start_date: NaiveDate,
    pub semester_end_date: NaiveDate,
}

impl TimetableInput {
    fn into_active_model(self, id: Uuid) -> timetable::ActiveModel {
        timetable::ActiveModel {
            id: Set(id),
            section_id: Set(self.section_id),
            subject_id: Set(self.subject_id),
            teacher_id: Set(self.teacher_id),
            day_of_week: Set(self.day_of_week),
            lecture_slot_id: Set(self.lecture_slot_id),
            semester_start_date: Set(self.semester_start_date),
            semester_end_date: Set(self.semester_end_date),
        }
    }
}

pub struct TimetableService;

impl TimetableService {
    pub async fn create(
        db: &DatabaseConnection,
        input: TimetableInput,
    ) -> Result<timetable::Model, Error> {
        let timetable = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!(
            "Created timetable {} on {}",
            timetable.id, timetable.day_of_week
        );

        Ok(timetable)
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<timetable::Model>, Error> {
        Ok(timetable::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<timetable::Model>, Error> {
        Ok(timetable::Entity::find()
            .order_by_asc(timetable::Column::SectionId)
            .order_by_asc(timetable::Column::DayOfWeek)
            .all(db)
            .await?)
    }

    /// Sessions held for a timetable slot, oldest first
    pub async fn sessions(
        db: &DatabaseConnection,
        timetable_id: Uuid,
    ) -> Result<Vec<session::Model>, Error> {
        Ok(session::Entity::find()
            .filter(session::Column::TimetableId.eq(timetable_id))
            .order_by_asc(session::Column::Date)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: TimetableInput,
    ) -> Result<Option<timetable::Model>, Error> {
        let Some(timetable) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated timetable {}", timetable.id);

        Ok(Some(timetable))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<timetable::Entity>(db, id).await?;
        debug!("Deleted timetable {id}: {deleted}");

        Ok(deleted)
    }
}
