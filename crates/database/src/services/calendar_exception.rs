use super::{delete_by_id, updated};
use crate::{entities::calendar_exception, error::Error};
use chrono::NaiveDate;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarExceptionInput {
    pub date: NaiveDate,
    pub description: String,
}

impl CalendarExceptionInput {
    fn into_active_model(self, id: Uuid) -> calendar_exception::ActiveModel {
        calendar_exception::ActiveModel {
            id: Set(id),
            date: Set(self.date),
            description: Set(self.description),
        }
    }
}

pub struct CalendarExceptionService;

impl CalendarExceptionService {
    pub async fn create(
        db: &DatabaseConnection,
        input: CalendarExceptionInput,
    ) -> Result<calendar_exception::Model, Error> {
        let exception = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created calendar exception {exception}");

        Ok(exception)
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<calendar_exception::Model>, Error> {
        Ok(calendar_exception::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_date(
        db: &DatabaseConnection,
        date: NaiveDate,
    ) -> Result<Option<calendar_exception::Model>, Error> {
        Ok(calendar_exception::Entity::find()
            .filter(calendar_exception::Column::Date.eq(date))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<calendar_exception::Model>, Error> {
        Ok(calendar_exception::Entity::find()
            .order_by_asc(calendar_exception::Column::Date)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: CalendarExceptionInput,
    ) -> Result<Option<calendar_exception::Model>, Error> {
        let Some(exception) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated calendar exception {exception}");

        Ok(Some(exception))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<calendar_exception::Entity>(db, id).await?;
        debug!("Deleted calendar exception {id}: {deleted}");

        Ok(deleted)
    }
}
