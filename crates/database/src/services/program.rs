use super::{delete_by_id, updated};
use crate::{
    entities::{program, section},
    error::Error,
};
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
pub struct ProgramInput {
    pub name: String,
    pub duration_years: i32,
}

impl ProgramInput {
    pub fn validate(&self) -> Result<(), Error> {
        validate_non_negative("duration_years", self.duration_years)?;

        Ok(())
    }

    fn into_active_model(self, id: Uuid) -> program::ActiveModel {
        program::ActiveModel {
            id: Set(id),
            name: Set(self.name),
            duration_years: Set(self.duration_years),
        }
    }
}

pub struct ProgramService;

impl ProgramService {
    pub async fn create(
        db: &DatabaseConnection,
        input: ProgramInput,
    ) -> Result<program::Model, Error> {
        input.validate()?;

        let program = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created program {program}");

        Ok(program)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<program::Model>, Error> {
        Ok(program::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<program::Model>, Error> {
        Ok(program::Entity::find()
            .filter(program::Column::Name.eq(name))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<program::Model>, Error> {
        Ok(program::Entity::find()
            .order_by_asc(program::Column::Name)
            .all(db)
            .await?)
    }

    /// All sections belonging to a program, by year then name
    pub async fn sections(
        db: &DatabaseConnection,
        program_id: Uuid,
    ) -> Result<Vec<section::Model>, Error> {
        Ok(section::Entity::find()
            .filter(section::Column::ProgramId.eq(program_id))
            .order_by_asc(section::Column::Year)
            .order_by_asc(section::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: ProgramInput,
    ) -> Result<Option<program::Model>, Error> {
        input.validate()?;

        let Some(program) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated program {program}");

        Ok(Some(program))
    }

    /// Deletes a program together with its sections and everything they own
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<program::Entity>(db, id).await?;
        debug!("Deleted program {id}: {deleted}");

        Ok(deleted)
    }
}
