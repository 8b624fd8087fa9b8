use sea_orm::DatabaseConnection;

use crate::auth::authorization;
use crate::auth::session::Session;
use crate::commands::{AssignEventArgs, DeleteEventArgs, UpdateEventArgs};
use crate::db;
use crate::error::{CrmError, CrmResult};
use crate::models::events::UpdateEvent;
use crate::models::users::Role;
use crate::rules;
use crate::validation;

/// Claim an event as its support contact.
///
/// The first support user to claim an event keeps it: repeating the claim is
/// a no-op reported as "already assigned to you", and claiming someone
/// else's event is denied without touching the assignment.
pub async fn assign_event(
    db: &DatabaseConnection,
    session: &Session,
    args: AssignEventArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Support)?;

    let event_id = validation::resolve(args.event_id, "Event ID", validation::parse_id)?;
    let event = db::events::get_event_by_id(db, event_id).await?;

    match event.support_contact_id {
        None => {
            db::events::set_support_contact(db, event_id, session.user_id).await?;
            println!(
                "Event {} assigned to {} successfully.",
                event_id, session.username
            );
            Ok(())
        }
        Some(id) if id == session.user_id => {
            println!("This event is already assigned to you.");
            Ok(())
        }
        Some(_) => Err(CrmError::PermissionDenied(
            "this event is already assigned to another support user".to_string(),
        )),
    }
}

/// Update an event assigned to the logged-in support user. New dates must
/// still fall inside the parent contract's window.
pub async fn update_event(
    db: &DatabaseConnection,
    session: &Session,
    args: UpdateEventArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Support)?;

    let event_id = validation::resolve(args.event_id, "Event ID", validation::parse_id)?;
    let event = db::events::get_event_by_id(db, event_id).await?;
    authorization::require_owner(&event, session)?;

    let contract = db::contracts::get_contract_by_id(db, event.contract_id).await?;

    let start_date =
        validation::resolve_opt(args.start_date, "Event start date", validation::parse_date)?;
    let end_date =
        validation::resolve_opt(args.end_date, "Event end date", validation::parse_date)?;

    let effective_start = start_date.unwrap_or(event.start_date);
    let effective_end = end_date.unwrap_or(event.end_date);
    rules::check_event_window(&contract, effective_start, effective_end)?;

    let attendees = validation::resolve_opt(
        args.attendees,
        "Number of attendees",
        validation::parse_attendees,
    )?;

    db::events::update_event(
        db,
        event_id,
        UpdateEvent {
            start_date,
            end_date,
            attendees,
            notes: args.notes,
        },
    )
    .await?;

    println!("Event {event_id} updated successfully.");
    Ok(())
}

/// Delete an event assigned to the logged-in support user.
pub async fn delete_event(
    db: &DatabaseConnection,
    session: &Session,
    args: DeleteEventArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Support)?;

    let event_id = validation::resolve(args.event_id, "Event ID", validation::parse_id)?;
    let event = db::events::get_event_by_id(db, event_id).await?;
    authorization::require_owner(&event, session)?;

    db::events::delete_event(db, event_id).await?;
    println!("Event {event_id} deleted successfully.");
    Ok(())
}
