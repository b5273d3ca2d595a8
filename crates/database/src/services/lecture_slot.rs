use super::{delete_by_id, updated};
use crate::{entities::lecture_slot, error::Error};
use chrono::NaiveTime;
use log::debug;
use models::lecture_slot::validate_slot_times;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LectureSlotInput {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl LectureSlotInput {
    /// Checks the slot ends after it starts
    pub fn validate(&self) -> Result<(), Error> {
        Ok(validate_slot_times(self.start_time, self.end_time)?)
    }

    fn into_active_model(self, id: Uuid) -> lecture_slot::ActiveModel {
        lecture_slot::ActiveModel {
            id: Set(id),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
        }
    }
}

pub struct LectureSlotService;

impl LectureSlotService {
    pub async fn create(
        db: &DatabaseConnection,
        input: LectureSlotInput,
    ) -> Result<lecture_slot::Model, Error> {
        input.validate()?;

        let slot = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created lecture slot {slot}");

        Ok(slot)
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<lecture_slot::Model>, Error> {
        Ok(lecture_slot::Entity::find_by_id(id).one(db).await?)
    }

    /// All slots in the order they occur during the day
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<lecture_slot::Model>, Error> {
        Ok(lecture_slot::Entity::find()
            .order_by_asc(lecture_slot::Column::StartTime)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: LectureSlotInput,
    ) -> Result<Option<lecture_slot::Model>, Error> {
        input.validate()?;

        let Some(slot) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated lecture slot {slot}");

        Ok(Some(slot))
    }

    /// Deletes a slot. Fails with a foreign-key violation while any
    /// timetable still starts in it.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<lecture_slot::Entity>(db, id).await?;
        debug!("Deleted lecture slot {id}: {deleted}");

        Ok(deleted)
    }
}
