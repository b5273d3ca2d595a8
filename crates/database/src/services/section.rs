use super::{delete_by_id, updated};
use crate::{
    entities::{program, section, student, timetable},
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
pub struct SectionInput {
    pub program_id: Uuid,
    pub name: String,
    pub year: i32,
}

impl SectionInput {
    pub fn validate(&self) -> Result<(), Error> {
        validate_non_negative("year", self.year)?;

        Ok(())
    }

    fn into_active_model(self, id: Uuid) -> section::ActiveModel {
        section::ActiveModel {
            id: Set(id),
            program_id: Set(self.program_id),
            name: Set(self.name),
            year: Set(self.year),
        }
    }
}

pub struct SectionService;

impl SectionService {
    pub async fn create(
        db: &DatabaseConnection,
        input: SectionInput,
    ) -> Result<section::Model, Error> {
        input.validate()?;

        let section = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created section {} ({})", section.name, section.id);

        Ok(section)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<section::Model>, Error> {
        Ok(section::Entity::find_by_id(id).one(db).await?)
    }

    /// A section along with the program it belongs to
    pub async fn get_with_program(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(section::Model, program::Model)>, Error> {
        let found = section::Entity::find_by_id(id)
            .find_also_related(program::Entity)
            .one(db)
            .await?;

        Ok(found.and_then(|(section, program)| program.map(|p| (section, p))))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<section::Model>, Error> {
        Ok(section::Entity::find()
            .order_by_asc(section::Column::ProgramId)
            .order_by_asc(section::Column::Year)
            .order_by_asc(section::Column::Name)
            .all(db)
            .await?)
    }

    /// Students in a section, ordered by roll number
    pub async fn students(
        db: &DatabaseConnection,
        section_id: Uuid,
    ) -> Result<Vec<student::Model>, Error> {
        Ok(student::Entity::find()
            .filter(student::Column::SectionId.eq(section_id))
            .order_by_asc(student::Column::RollNumber)
            .all(db)
            .await?)
    }

    pub async fn timetables(
        db: &DatabaseConnection,
        section_id: Uuid,
    ) -> Result<Vec<timetable::Model>, Error> {
        Ok(timetable::Entity::find()
            .filter(timetable::Column::SectionId.eq(section_id))
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: SectionInput,
    ) -> Result<Option<section::Model>, Error> {
        input.validate()?;

        let Some(section) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated section {} ({})", section.name, section.id);

        Ok(Some(section))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<section::Entity>(db, id).await?;
        debug!("Deleted section {id}: {deleted}");

        Ok(deleted)
    }
}
