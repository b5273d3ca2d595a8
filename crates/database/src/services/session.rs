use super::{delete_by_id, updated};
use crate::{
    entities::{attendance, session},
    error::Error,
};
use chrono::NaiveDate;
use log::debug;
use models::session_status::SessionStatus;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionInput {
    pub timetable_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: SessionStatus,
}

impl SessionInput {
    fn into_active_model(self, id: Uuid) -> session::ActiveModel {
        session::ActiveModel {
            id: Set(id),
            timetable_id: Set(self.timetable_id),
            date: Set(self.date),
            status: Set(self.status),
        }
    }
}

pub struct SessionService;

impl SessionService {
    /// Creates a session. A second session for the same timetable and date
    /// is rejected by the database.
    pub async fn create(
        db: &DatabaseConnection,
        input: SessionInput,
    ) -> Result<session::Model, Error> {
        let session = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created session {session}");

        Ok(session)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<session::Model>, Error> {
        Ok(session::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find(
        db: &DatabaseConnection,
        timetable_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<session::Model>, Error> {
        Ok(session::Entity::find()
            .filter(session::Column::TimetableId.eq(timetable_id))
            .filter(session::Column::Date.eq(date))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<session::Model>, Error> {
        Ok(session::Entity::find()
            .order_by_asc(session::Column::Date)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: SessionInput,
    ) -> Result<Option<session::Model>, Error> {
        let Some(session) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated session {session}");

        Ok(Some(session))
    }

    /// Records a status change decided elsewhere. Any status may follow any
    /// other.
    pub async fn set_status(
        db: &DatabaseConnection,
        id: Uuid,
        status: SessionStatus,
    ) -> Result<Option<session::Model>, Error> {
        let change = session::ActiveModel {
            id: Unchanged(id),
            status: Set(status),
            ..Default::default()
        };
        let Some(session) = updated(change.update(db).await)? else {
            return Ok(None);
        };
        debug!("Session {} is now {}", session.id, session.status);

        Ok(Some(session))
    }

    /// Attendance marks taken in a session
    pub async fn attendance(
        db: &DatabaseConnection,
        session_id: Uuid,
    ) -> Result<Vec<attendance::Model>, Error> {
        Ok(attendance::Entity::find()
            .filter(attendance::Column::SessionId.eq(session_id))
            .all(db)
            .await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<session::Entity>(db, id).await?;
        debug!("Deleted session {id}: {deleted}");

        Ok(deleted)
    }
}
