use super::{delete_by_id, updated};
use crate::{entities::teacher, error::Error};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeacherInput {
    /// Subject identifier issued by the authentication provider
    pub account_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl TeacherInput {
    fn into_active_model(self, id: Uuid) -> teacher::ActiveModel {
        teacher::ActiveModel {
            id: Set(id),
            account_id: Set(self.account_id),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone: Set(self.phone),
            is_admin: Set(self.is_admin),
        }
    }
}

pub struct TeacherService;

impl TeacherService {
    pub async fn create(
        db: &DatabaseConnection,
        input: TeacherInput,
    ) -> Result<teacher::Model, Error> {
        let teacher = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created teacher {teacher}");

        Ok(teacher)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<teacher::Model>, Error> {
        Ok(teacher::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<teacher::Model>, Error> {
        Ok(teacher::Entity::find()
            .filter(teacher::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    /// Looks up the teacher linked to an authentication account
    pub async fn find_by_account(
        db: &DatabaseConnection,
        account_id: &str,
    ) -> Result<Option<teacher::Model>, Error> {
        Ok(teacher::Entity::find()
            .filter(teacher::Column::AccountId.eq(account_id))
            .one(db)
            .await?)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<teacher::Model>, Error> {
        Ok(teacher::Entity::find()
            .order_by_asc(teacher::Column::LastName)
            .order_by_asc(teacher::Column::FirstName)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: TeacherInput,
    ) -> Result<Option<teacher::Model>, Error> {
        let Some(teacher) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated teacher {teacher}");

        Ok(Some(teacher))
    }

    /// Deletes a teacher. Timetables and attendance marks that referenced
    /// them are kept with the reference cleared.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<teacher::Entity>(db, id).await?;
        debug!("Deleted teacher {id}: {deleted}");

        Ok(deleted)
    }
}
