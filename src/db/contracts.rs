use chrono::NaiveDate;
use sea_orm::*;

use crate::error::{CrmError, CrmResult};
use crate::models::contracts::{self, ContractStatus, CreateContract, UpdateContract};
use crate::rules;

/// Whether the client already has an EN_COURS contract.
pub async fn client_has_open_contract(db: &DatabaseConnection, client_id: i32) -> CrmResult<bool> {
    let count = contracts::Entity::find()
        .filter(contracts::Column::ClientId.eq(client_id))
        .filter(contracts::Column::Status.eq(ContractStatus::EnCours))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Insert a new contract authored by the given administration user.
///
/// New contracts always start EN_COURS. The `completed_on_create` hook runs
/// right after the insert and, when the end date has already passed with
/// payment received, persists the promotion to TERMINE as a second save in
/// the same transaction. This hook fires on creation only; `update_contract`
/// never re-evaluates it.
pub async fn insert_contract(
    db: &DatabaseConnection,
    input: CreateContract,
    author_id: i32,
    today: NaiveDate,
) -> CrmResult<contracts::Model> {
    let txn = db.begin().await?;

    let open = contracts::Entity::find()
        .filter(contracts::Column::ClientId.eq(input.client_id))
        .filter(contracts::Column::Status.eq(ContractStatus::EnCours))
        .count(&txn)
        .await?;
    if open > 0 {
        return Err(CrmError::Validation(format!(
            "client {} already has a contract in progress",
            input.client_id
        )));
    }

    let new_contract = contracts::ActiveModel {
        client_id: Set(input.client_id),
        status: Set(ContractStatus::EnCours),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        price: Set(input.price),
        payment_received: Set(input.payment_received),
        is_signed: Set(input.is_signed),
        author_id: Set(author_id),
        ..Default::default()
    };

    let mut contract = new_contract.insert(&txn).await?;

    if rules::completed_on_create(contract.end_date, contract.payment_received, today) {
        let mut active: contracts::ActiveModel = contract.into();
        active.status = Set(ContractStatus::Termine);
        contract = active.update(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(
        contract_id = contract.id,
        status = %contract.status,
        "contract created"
    );
    Ok(contract)
}

/// Fetch a single contract by ID.
pub async fn get_contract_by_id(db: &DatabaseConnection, id: i32) -> CrmResult<contracts::Model> {
    contracts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(CrmError::NotFound("contract", id))
}

/// Update an existing contract as one atomic commit.
pub async fn update_contract(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateContract,
) -> CrmResult<contracts::Model> {
    let txn = db.begin().await?;

    let contract = contracts::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(CrmError::NotFound("contract", id))?;

    let mut active: contracts::ActiveModel = contract.into();

    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(price) = input.price {
        active.price = Set(price);
    }
    if let Some(payment_received) = input.payment_received {
        active.payment_received = Set(payment_received);
    }
    if let Some(is_signed) = input.is_signed {
        active.is_signed = Set(is_signed);
    }

    let updated = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(contract_id = updated.id, "contract updated");
    Ok(updated)
}

/// Delete a contract by ID.
pub async fn delete_contract(db: &DatabaseConnection, id: i32) -> CrmResult<()> {
    let result = contracts::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CrmError::NotFound("contract", id));
    }
    tracing::info!(contract_id = id, "contract deleted");
    Ok(())
}
