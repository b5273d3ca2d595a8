pub mod attendance;
pub mod backup;
pub mod calendar_exception;
pub mod lecture_slot;
pub mod program;
pub mod section;
pub mod semester;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod timetable;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

/// Deletes a row by primary key, reporting whether anything was removed.
///
/// Referential actions (cascade, set null, delete protection) are applied by the
/// database as part of this statement.
pub(crate) async fn delete_by_id<E>(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let result = E::delete_by_id(id).exec(db).await?;

    Ok(result.rows_affected > 0)
}

/// Converts the outcome of `ActiveModel::update` so that a row which does not
/// exist (or vanished before the statement ran) is reported as `None`
pub(crate) fn updated<M>(result: Result<M, DbErr>) -> Result<Option<M>, DbErr> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_maps_missing_row_to_none() {
        assert_eq!(updated(Ok(7)).unwrap(), Some(7));
        assert_eq!(updated::<i32>(Err(DbErr::RecordNotUpdated)).unwrap(), None);
        assert_eq!(
            updated::<i32>(Err(DbErr::RecordNotFound("gone".to_string()))).unwrap(),
            None
        );
        assert!(updated::<i32>(Err(DbErr::Custom("boom".to_string()))).is_err());
    }
}
