mod common;

use common::{setup, time};
use database::{
    Error,
    entities::lecture_slot,
    services::lecture_slot::{LectureSlotInput, LectureSlotService},
};
use models::validation::ValidationError;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbErr, EntityTrait, PaginatorTrait};
use uuid::Uuid;

/// Expect success when the slot ends after it starts
#[tokio::test]
async fn test_create_slot_success() -> Result<(), Error> {
    let db = setup().await?;

    let slot = LectureSlotService::create(
        &db,
        LectureSlotInput {
            start_time: time(8, 30),
            end_time: time(9, 30),
        },
    )
    .await?;

    assert!(slot.end_time > slot.start_time);
    assert_eq!(slot.to_string(), "08:30 AM - 09:30 AM");

    Ok(())
}

/// Expect a validation error, and nothing stored, when the slot ends before it starts
#[tokio::test]
async fn test_create_slot_end_before_start() -> Result<(), Error> {
    let db = setup().await?;

    let result = LectureSlotService::create(
        &db,
        LectureSlotInput {
            start_time: time(10, 0),
            end_time: time(9, 0),
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::EndNotAfterStart))
    ));
    assert_eq!(lecture_slot::Entity::find().count(&db).await?, 0);

    Ok(())
}

/// Expect a validation error when start and end are equal
#[tokio::test]
async fn test_create_slot_zero_length() -> Result<(), Error> {
    let db = setup().await?;

    let result = LectureSlotService::create(
        &db,
        LectureSlotInput {
            start_time: time(10, 0),
            end_time: time(10, 0),
        },
    )
    .await;

    assert!(matches!(result, Err(Error::Validation(_))));

    Ok(())
}

/// Expect updates to be validated the same way as creates
#[tokio::test]
async fn test_update_slot_end_before_start() -> Result<(), Error> {
    let db = setup().await?;
    let slot = LectureSlotService::create(
        &db,
        LectureSlotInput {
            start_time: time(8, 30),
            end_time: time(9, 30),
        },
    )
    .await?;

    let result = LectureSlotService::update(
        &db,
        slot.id,
        LectureSlotInput {
            start_time: time(9, 30),
            end_time: time(8, 30),
        },
    )
    .await;

    assert!(matches!(result, Err(Error::Validation(_))));

    // The stored slot is untouched
    let stored = LectureSlotService::get(&db, slot.id).await?.unwrap();
    assert_eq!(stored, slot);

    Ok(())
}

/// Expect the entity itself to refuse an invalid slot saved without the service
#[tokio::test]
async fn test_active_model_refuses_invalid_slot() -> Result<(), Error> {
    let db = setup().await?;

    let result = lecture_slot::ActiveModel {
        id: Set(Uuid::new_v4()),
        start_time: Set(time(14, 0)),
        end_time: Set(time(13, 0)),
    }
    .insert(&db)
    .await;

    assert!(matches!(result, Err(DbErr::Custom(msg)) if msg == "End time must be after start time"));
    assert_eq!(lecture_slot::Entity::find().count(&db).await?, 0);

    Ok(())
}

/// Expect slots to be listed in the order they occur during the day
#[tokio::test]
async fn test_list_slots_ordered_by_start_time() -> Result<(), Error> {
    let db = setup().await?;

    for (start, end) in [((12, 0), (13, 0)), ((8, 30), (9, 30)), ((10, 30), (11, 30))] {
        LectureSlotService::create(
            &db,
            LectureSlotInput {
                start_time: time(start.0, start.1),
                end_time: time(end.0, end.1),
            },
        )
        .await?;
    }

    let starts: Vec<_> = LectureSlotService::list(&db)
        .await?
        .into_iter()
        .map(|slot| slot.start_time)
        .collect();

    assert_eq!(starts, vec![time(8, 30), time(10, 30), time(12, 0)]);

    Ok(())
}
