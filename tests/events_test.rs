//! Event creation through the commercial command: signed-and-paid
//! precondition, contract window validation, client ownership.

mod common;

use common::*;
use event_crm::commands::{AddEventArgs, commercial};
use event_crm::error::CrmError;
use event_crm::models::events;
use event_crm::models::users::Role;
use sea_orm::{EntityTrait, PaginatorTrait};

fn event_args(contract_id: i32, start: &str, end: &str) -> AddEventArgs {
    AddEventArgs {
        contract_id: Some(contract_id.to_string()),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        attendees: Some("25".to_string()),
        notes: None,
    }
}

async fn event_count(db: &sea_orm::DatabaseConnection) -> u64 {
    events::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn event_on_unsigned_contract_is_refused() {
    let (db, _dir) = setup_db().await;
    let commercial_user = seed_user(&db, "carol", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &commercial_user).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        false,
        true,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&commercial_user);
    let err = commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-11-15", "2023-11-20"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::Validation(_)));
    assert_eq!(event_count(&db).await, 0);
}

#[tokio::test]
async fn event_on_unpaid_contract_is_refused() {
    let (db, _dir) = setup_db().await;
    let commercial_user = seed_user(&db, "carol", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &commercial_user).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        true,
        false,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&commercial_user);
    let err = commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-11-15", "2023-11-20"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::Validation(_)));
    assert_eq!(event_count(&db).await, 0);
}

#[tokio::test]
async fn event_inside_the_contract_window_is_created() {
    let (db, _dir) = setup_db().await;
    let commercial_user = seed_user(&db, "carol", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &commercial_user).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        true,
        true,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&commercial_user);
    commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-11-15", "2023-11-20"),
    )
    .await
    .unwrap();

    let stored = events::Entity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(stored.contract_id, contract.id);
    assert_eq!(stored.start_date, date(2023, 11, 15));
    assert_eq!(stored.end_date, date(2023, 11, 20));
    assert_eq!(stored.attendees, 25);
    assert_eq!(stored.support_contact_id, None);
}

#[tokio::test]
async fn event_starting_before_the_contract_window_is_refused() {
    let (db, _dir) = setup_db().await;
    let commercial_user = seed_user(&db, "carol", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &commercial_user).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        true,
        true,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&commercial_user);
    let err = commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-10-31", "2023-11-20"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::Validation(_)));
    assert_eq!(event_count(&db).await, 0);
}

#[tokio::test]
async fn event_ending_after_the_contract_window_is_refused() {
    let (db, _dir) = setup_db().await;
    let commercial_user = seed_user(&db, "carol", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &commercial_user).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        true,
        true,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&commercial_user);
    let err = commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-11-15", "2023-12-02"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::Validation(_)));
    assert_eq!(event_count(&db).await, 0);
}

#[tokio::test]
async fn event_for_another_commercials_client_is_denied() {
    let (db, _dir) = setup_db().await;
    let owner = seed_user(&db, "carol", Role::Commercial).await;
    let other = seed_user(&db, "colin", Role::Commercial).await;
    let admin = seed_user(&db, "adam", Role::Administration).await;
    let client = seed_client(&db, "Acme", "contact@acme.com", &owner).await;
    let contract = seed_contract(
        &db,
        &client,
        &admin,
        date(2023, 11, 1),
        date(2023, 12, 1),
        true,
        true,
        date(2023, 11, 10),
    )
    .await;

    let session = session_for(&other);
    let err = commercial::add_event(
        &db,
        &session,
        event_args(contract.id, "2023-11-15", "2023-11-20"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::PermissionDenied(_)));
    assert_eq!(event_count(&db).await, 0);
}

#[tokio::test]
async fn add_event_requires_the_commercial_role() {
    let (db, _dir) = setup_db().await;
    let admin = seed_user(&db, "adam", Role::Administration).await;

    let session = session_for(&admin);
    let err = commercial::add_event(&db, &session, event_args(1, "2023-11-15", "2023-11-20"))
        .await
        .unwrap_err();

    assert!(matches!(err, CrmError::PermissionDenied(_)));
}
