use super::{delete_by_id, updated};
use crate::{entities::semester, error::Error};
use log::debug;
use models::validation::validate_non_negative;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SemesterInput {
    pub semester: i32,
    pub subject: String,
}

impl SemesterInput {
    pub fn validate(&self) -> Result<(), Error> {
        validate_non_negative("semester", self.semester)?;

        Ok(())
    }

    fn into_active_model(self, id: Uuid) -> semester::ActiveModel {
        semester::ActiveModel {
            id: Set(id),
            semester: Set(self.semester),
            subject: Set(self.subject),
        }
    }
}

pub struct SemesterService;

impl SemesterService {
    pub async fn create(
        db: &DatabaseConnection,
        input: SemesterInput,
    ) -> Result<semester::Model, Error> {
        input.validate()?;

        let semester = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created semester {}", semester.semester);

        Ok(semester)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<semester::Model>, Error> {
        Ok(semester::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_number(
        db: &DatabaseConnection,
        number: i32,
    ) -> Result<Option<semester::Model>, Error> {
        Ok(semester::Entity::find()
            .filter(semester::Column::Semester.eq(number))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<semester::Model>, Error> {
        Ok(semester::Entity::find()
            .order_by_asc(semester::Column::Semester)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: SemesterInput,
    ) -> Result<Option<semester::Model>, Error> {
        input.validate()?;

        let Some(semester) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated semester {}", semester.semester);

        Ok(Some(semester))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<semester::Entity>(db, id).await?;
        debug!("Deleted semester {id}: {deleted}");

        Ok(deleted)
    }
}
