use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::auth::authorization;
use crate::auth::session::Session;
use crate::commands::{AddContractArgs, DeleteContractArgs, UpdateContractArgs};
use crate::db;
use crate::error::{CrmError, CrmResult};
use crate::models::contracts::{CreateContract, UpdateContract};
use crate::models::users::Role;
use crate::validation;

/// Create a contract for a client, authored by the logged-in
/// administration user.
///
/// The client must exist and have no EN_COURS contract. The post-create
/// lifecycle hook in the repository may promote the new contract straight
/// to TERMINE.
pub async fn add_contract(
    db: &DatabaseConnection,
    session: &Session,
    args: AddContractArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Administration)?;

    let client_id = validation::resolve(args.client_id, "Client ID", validation::parse_id)?;
    let client = db::clients::get_client_by_id(db, client_id).await?;

    let today = Utc::now().date_naive();
    let start_date = validation::resolve(
        args.start_date,
        "Contract start date",
        validation::date_not_past(today),
    )?;
    let end_date = validation::resolve(
        args.end_date,
        "Contract end date",
        validation::date_not_past(today),
    )?;
    if end_date <= start_date {
        return Err(CrmError::Validation(
            "the end date must be strictly after the start date".to_string(),
        ));
    }

    let price = validation::resolve(args.price, "Price", validation::parse_price)?;
    let is_signed = validation::resolve(
        args.signed,
        "Is the contract signed? (yes/no)",
        validation::parse_bool,
    )?;
    let payment_received = validation::resolve(
        args.payment_received,
        "Payment received? (yes/no)",
        validation::parse_bool,
    )?;

    let contract = db::contracts::insert_contract(
        db,
        CreateContract {
            client_id,
            start_date,
            end_date,
            price,
            is_signed,
            payment_received,
        },
        session.user_id,
        today,
    )
    .await?;

    println!(
        "Contract {} added successfully for client {}.",
        contract.id, client.name
    );
    Ok(())
}

/// Update a contract. Only its author may do so; all provided fields commit
/// atomically. The TERMINE promotion rule does not re-run here.
pub async fn update_contract(
    db: &DatabaseConnection,
    session: &Session,
    args: UpdateContractArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Administration)?;

    let id = validation::resolve(args.id, "Contract ID", validation::parse_id)?;
    let contract = db::contracts::get_contract_by_id(db, id).await?;
    authorization::require_owner(&contract, session)?;

    let today = Utc::now().date_naive();
    let status = validation::resolve_opt(args.status, "Contract status", validation::parse_status)?;
    let start_date = validation::resolve_opt(
        args.start_date,
        "Contract start date",
        validation::date_not_past(today),
    )?;
    let end_date = validation::resolve_opt(
        args.end_date,
        "Contract end date",
        validation::date_not_past(today),
    )?;

    let effective_start = start_date.unwrap_or(contract.start_date);
    let effective_end = end_date.unwrap_or(contract.end_date);
    if effective_end <= effective_start {
        return Err(CrmError::Validation(
            "the end date must be strictly after the start date".to_string(),
        ));
    }

    let price = validation::resolve_opt(args.price, "Price", validation::parse_price)?;
    let is_signed = validation::resolve_opt(
        args.signed,
        "Is the contract signed? (yes/no)",
        validation::parse_bool,
    )?;
    let payment_received = validation::resolve_opt(
        args.payment_received,
        "Payment received? (yes/no)",
        validation::parse_bool,
    )?;

    let updated = db::contracts::update_contract(
        db,
        id,
        UpdateContract {
            status,
            start_date,
            end_date,
            price,
            payment_received,
            is_signed,
        },
    )
    .await?;

    println!("Contract {} updated successfully.", updated.id);
    Ok(())
}

/// Delete a contract. Only its author may do so.
pub async fn delete_contract(
    db: &DatabaseConnection,
    session: &Session,
    args: DeleteContractArgs,
) -> CrmResult<()> {
    authorization::require_role(session, Role::Administration)?;

    let id = validation::resolve(args.id, "Contract ID", validation::parse_id)?;
    let contract = db::contracts::get_contract_by_id(db, id).await?;
    authorization::require_owner(&contract, session)?;

    db::contracts::delete_contract(db, id).await?;
    println!("Contract {id} deleted successfully.");
    Ok(())
}
