use super::{delete_by_id, updated};
use crate::{entities::attendance, error::Error};
use chrono::{NaiveDateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AttendanceInput {
    pub student_id: Uuid,
    pub session_id: Uuid,
    /// true = present, false = absent
    #[serde(default)]
    pub status: bool,
    /// Teacher recording the mark
    pub recorded_by: Option<Uuid>,
    /// When the mark was taken; defaults to now
    pub timestamp: Option<NaiveDateTime>,
}

impl AttendanceInput {
    fn into_active_model(self, id: Uuid) -> attendance::ActiveModel {
        attendance::ActiveModel {
            id: Set(id),
            student_id: Set(self.student_id),
            session_id: Set(self.session_id),
            status: Set(self.status),
            timestamp: Set(self.timestamp.unwrap_or_else(|| Utc::now().naive_utc())),
            recorded_by: Set(self.recorded_by),
        }
    }
}

pub struct AttendanceService;

impl AttendanceService {
    /// Records a student's mark for a session. A student has at most one mark
    /// per session; a second mark fails with a uniqueness violation.
    pub async fn mark(
        db: &DatabaseConnection,
        input: AttendanceInput,
    ) -> Result<attendance::Model, Error> {
        let mark = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!(
            "Marked student {} {} for session {}",
            mark.student_id,
            mark.status_label(),
            mark.session_id
        );

        Ok(mark)
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<attendance::Model>, Error> {
        Ok(attendance::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find(
        db: &DatabaseConnection,
        student_id: Uuid,
        session_id: Uuid,
    ) -> Result<Option<attendance::Model>, Error> {
        Ok(attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .filter(attendance::Column::SessionId.eq(session_id))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<attendance::Model>, Error> {
        Ok(attendance::Entity::find()
            .order_by_asc(attendance::Column::Timestamp)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: AttendanceInput,
    ) -> Result<Option<attendance::Model>, Error> {
        let Some(mark) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated attendance {} to {}", mark.id, mark.status_label());

        Ok(Some(mark))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<attendance::Entity>(db, id).await?;
        debug!("Deleted attendance {id}: {deleted}");

        Ok(deleted)
    }
}
