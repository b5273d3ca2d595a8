use super::{delete_by_id, updated};
use crate::{
    entities::{student, student_subject, subject},
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
pub struct SubjectInput {
    pub name: String,
    #[serde(default = "default_is_law_subject")]
    pub is_law_subject: bool,
    pub semester: i32,
}

fn default_is_law_subject() -> bool {
    true
}

impl SubjectInput {
    pub fn validate(&self) -> Result<(), Error> {
        validate_non_negative("semester", self.semester)?;

        Ok(())
    }

    fn into_active_model(self, id: Uuid) -> subject::ActiveModel {
        subject::ActiveModel {
            id: Set(id),
            name: Set(self.name),
            is_law_subject: Set(self.is_law_subject),
            semester: Set(self.semester),
        }
    }
}

pub struct SubjectService;

impl SubjectService {
    pub async fn create(
        db: &DatabaseConnection,
        input: SubjectInput,
    ) -> Result<subject::Model, Error> {
        input.validate()?;

        let subject = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created subject {subject}");

        Ok(subject)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<subject::Model>, Error> {
        Ok(subject::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<subject::Model>, Error> {
        Ok(subject::Entity::find()
            .filter(subject::Column::Name.eq(name))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<subject::Model>, Error> {
        Ok(subject::Entity::find()
            .order_by_asc(subject::Column::Semester)
            .order_by_asc(subject::Column::Name)
            .all(db)
            .await?)
    }

    /// Students enrolled in a subject, ordered by roll number
    pub async fn students(
        db: &DatabaseConnection,
        subject_id: Uuid,
    ) -> Result<Vec<student::Model>, Error> {
        Ok(student::Entity::find()
            .inner_join(student_subject::Entity)
            .filter(student_subject::Column::SubjectId.eq(subject_id))
            .order_by_asc(student::Column::RollNumber)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: SubjectInput,
    ) -> Result<Option<subject::Model>, Error> {
        input.validate()?;

        let Some(subject) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated subject {subject}");

        Ok(Some(subject))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<subject::Entity>(db, id).await?;
        debug!("Deleted subject {id}: {deleted}");

        Ok(deleted)
    }
}
