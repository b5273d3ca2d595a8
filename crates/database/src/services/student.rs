use super::{delete_by_id, updated};
use crate::{
    entities::{attendance, student, student_subject, subject},
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
pub struct StudentInput {
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub semester: i32,
    pub section_id: Uuid,
}

impl StudentInput {
    pub fn validate(&self) -> Result<(), Error> {
        validate_non_negative("semester", self.semester)?;

        Ok(())
    }

    fn into_active_model(self, id: Uuid) -> student::ActiveModel {
        student::ActiveModel {
            id: Set(id),
            roll_number: Set(self.roll_number),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone: Set(self.phone),
            semester: Set(self.semester),
            section_id: Set(self.section_id),
        }
    }
}

pub struct StudentService;

impl StudentService {
    pub async fn create(
        db: &DatabaseConnection,
        input: StudentInput,
    ) -> Result<student::Model, Error> {
        input.validate()?;

        let student = input.into_active_model(Uuid::new_v4()).insert(db).await?;
        debug!("Created student {student}");

        Ok(student)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<student::Model>, Error> {
        Ok(student::Entity::find_by_id(id).one(db).await?)
    }

    /// All students, ordered by roll number
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<student::Model>, Error> {
        Ok(student::Entity::find()
            .order_by_asc(student::Column::RollNumber)
            .all(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: StudentInput,
    ) -> Result<Option<student::Model>, Error> {
        input.validate()?;

        let Some(student) = updated(input.into_active_model(id).update(db).await)? else {
            return Ok(None);
        };
        debug!("Updated student {student}");

        Ok(Some(student))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, Error> {
        let deleted = delete_by_id::<student::Entity>(db, id).await?;
        debug!("Deleted student {id}: {deleted}");

        Ok(deleted)
    }

    /// Subjects the student is enrolled in
    pub async fn subjects(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> Result<Vec<subject::Model>, Error> {
        Ok(subject::Entity::find()
            .inner_join(student_subject::Entity)
            .filter(student_subject::Column::StudentId.eq(student_id))
            .order_by_asc(subject::Column::Name)
            .all(db)
            .await?)
    }

    /// Links a student to a subject. Enrolling twice in the same subject is
    /// rejected by the database.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: Uuid,
        subject_id: Uuid,
    ) -> Result<student_subject::Model, Error> {
        let link = student_subject::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            subject_id: Set(subject_id),
        }
        .insert(db)
        .await?;
        debug!("Enrolled student {student_id} in subject {subject_id}");

        Ok(link)
    }

    /// Removes a student from a subject, reporting whether they were enrolled
    pub async fn unenroll(
        db: &DatabaseConnection,
        student_id: Uuid,
        subject_id: Uuid,
    ) -> Result<bool, Error> {
        let result = student_subject::Entity::delete_many()
            .filter(student_subject::Column::StudentId.eq(student_id))
            .filter(student_subject::Column::SubjectId.eq(subject_id))
            .exec(db)
            .await?;
        debug!("Unenrolled student {student_id} from subject {subject_id}");

        Ok(result.rows_affected > 0)
    }

    /// Every attendance mark recorded for a student
    pub async fn attendance(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> Result<Vec<attendance::Model>, Error> {
        Ok(attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .order_by_asc(attendance::Column::Timestamp)
            .all(db)
            .await?)
    }
}
