use sea_orm::*;

use crate::error::{CrmError, CrmResult};
use crate::models::events::{self, CreateEvent, UpdateEvent};

/// Insert a new event. The signed-and-paid precondition and the contract
/// window check happen in the command layer before this is called.
pub async fn insert_event(db: &DatabaseConnection, input: CreateEvent) -> CrmResult<events::Model> {
    let new_event = events::ActiveModel {
        contract_id: Set(input.contract_id),
        support_contact_id: Set(None),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        attendees: Set(input.attendees),
        notes: Set(input.notes),
        ..Default::default()
    };

    let event = new_event.insert(db).await?;
    tracing::info!(
        event_id = event.id,
        contract_id = event.contract_id,
        "event created"
    );
    Ok(event)
}

/// Fetch a single event by ID.
pub async fn get_event_by_id(db: &DatabaseConnection, id: i32) -> CrmResult<events::Model> {
    events::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(CrmError::NotFound("event", id))
}

/// Record the support user now responsible for the event. The claim rules
/// (first claimer wins, same-user repeats are no-ops) live in the command
/// layer; this just persists the assignment.
pub async fn set_support_contact(
    db: &DatabaseConnection,
    id: i32,
    support_contact_id: i32,
) -> CrmResult<events::Model> {
    let event = get_event_by_id(db, id).await?;

    let mut active: events::ActiveModel = event.into();
    active.support_contact_id = Set(Some(support_contact_id));

    let updated = active.update(db).await?;
    tracing::info!(event_id = id, support_contact_id, "support contact assigned");
    Ok(updated)
}

/// Update an existing event as one atomic commit.
pub async fn update_event(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateEvent,
) -> CrmResult<events::Model> {
    let txn = db.begin().await?;

    let event = events::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(CrmError::NotFound("event", id))?;

    let mut active: events::ActiveModel = event.into();

    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(attendees) = input.attendees {
        active.attendees = Set(attendees);
    }
    if let Some(notes) = input.notes {
        active.notes = Set(Some(notes));
    }

    let updated = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(event_id = updated.id, "event updated");
    Ok(updated)
}

/// Delete an event by ID.
pub async fn delete_event(db: &DatabaseConnection, id: i32) -> CrmResult<()> {
    let result = events::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CrmError::NotFound("event", id));
    }
    tracing::info!(event_id = id, "event deleted");
    Ok(())
}
