use sea_orm::DatabaseConnection;

use crate::auth::authorization;
use crate::auth::session::Session;
use crate::commands::{AddClientArgs, AddEventArgs, DeleteClientArgs, UpdateClientArgs};
use crate::db;
use crate::error::{CrmError, CrmResult};
use crate::models::clients::{CreateClient, UpdateClient};
use crate::models::events::CreateEvent;
use crate::models::users::Role;
use crate::rules;
use crate::validation;

/// Add a new client. The logged-in commercial becomes its contact.
pub async fn add_client(
    db: &DatabaseConnection,
    session: &Session,
    args: AddClientArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Commercial)?;

    let name = validation::resolve(args.name, "Client name", validation::parse_nonempty)?;
    let email = validation::resolve(args.email, "Client email", validation::parse_email)?;
    let phone = validation::resolve_opt(args.phone, "Phone number", validation::parse_phone)?;
    let company_name =
        validation::resolve_opt(args.company_name, "Company name", validation::parse_nonempty)?;

    let client = db::clients::insert_client(
        db,
        CreateClient {
            name,
            email,
            phone,
            company_name,
        },
        session.user_id,
    )
    .await?;

    println!("Client {} added successfully.", client.name);
    Ok(())
}

/// Update a client. Only the commercial who created it may do so.
pub async fn update_client(
    db: &DatabaseConnection,
    session: &Session,
    args: UpdateClientArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Commercial)?;

    let id = validation::resolve(args.id, "Client ID", validation::parse_id)?;
    let client = db::clients::get_client_by_id(db, id).await?;
    authorization::require_owner(&client, session)?;

    let input = UpdateClient {
        name: validation::resolve_opt(args.name, "Client name", validation::parse_nonempty)?,
        email: validation::resolve_opt(args.email, "Client email", validation::parse_email)?,
        phone: validation::resolve_opt(args.phone, "Phone number", validation::parse_phone)?,
        company_name: validation::resolve_opt(
            args.company_name,
            "Company name",
            validation::parse_nonempty,
        )?,
    };

    let updated = db::clients::update_client(db, id, input).await?;
    println!("Client {} updated successfully.", updated.name);
    Ok(())
}

/// Delete a client. Only the commercial who created it may do so.
pub async fn delete_client(
    db: &DatabaseConnection,
    session: &Session,
    args: DeleteClientArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Commercial)?;

    let id = validation::resolve(args.id, "Client ID", validation::parse_id)?;
    let client = db::clients::get_client_by_id(db, id).await?;
    authorization::require_owner(&client, session)?;

    db::clients::delete_client(db, id).await?;
    println!("Client {id} deleted successfully.");
    Ok(())
}

/// Add an event to a contract.
///
/// The commercial must be responsible for the contract's client, the
/// contract must be signed and paid, and the event dates must fall inside
/// the contract window.
pub async fn add_event(
    db: &DatabaseConnection,
    session: &Session,
    args: AddEventArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Commercial)?;

    let contract_id = validation::resolve(args.contract_id, "Contract ID", validation::parse_id)?;
    let contract = db::contracts::get_contract_by_id(db, contract_id).await?;
    let client = db::clients::get_client_by_id(db, contract.client_id).await?;

    if client.commercial_contact_id != session.user_id {
        return Err(CrmError::PermissionDenied(
            "you can only add events for clients you are responsible for".to_string(),
        ));
    }

    rules::check_event_preconditions(&contract)?;

    let start_date =
        validation::resolve(args.start_date, "Event start date", validation::parse_date)?;
    let end_date = validation::resolve(args.end_date, "Event end date", validation::parse_date)?;
    rules::check_event_window(&contract, start_date, end_date)?;

    let attendees = validation::resolve(
        args.attendees,
        "Number of attendees",
        validation::parse_attendees,
    )?;

    let event = db::events::insert_event(
        db,
        CreateEvent {
            contract_id,
            start_date,
            end_date,
            attendees,
            notes: args.notes,
        },
    )
    .await?;

    println!(
        "Event {} added successfully for contract {}.",
        event.id, contract_id
    );
    Ok(())
}
