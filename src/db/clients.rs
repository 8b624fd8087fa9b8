use sea_orm::*;

use crate::error::{CrmError, CrmResult};
use crate::models::clients::{self, CreateClient, UpdateClient};

/// Insert a new client owned by the given commercial.
///
/// Client names are unique by convention at the application layer only, so
/// the pre-check here is the single line of defense for `name`; `email` is
/// additionally covered by a unique index.
pub async fn insert_client(
    db: &DatabaseConnection,
    input: CreateClient,
    commercial_contact_id: i32,
) -> CrmResult<clients::Model> {
    if find_by_name(db, &input.name).await?.is_some() {
        return Err(CrmError::Validation(format!(
            "a client named '{}' already exists",
            input.name
        )));
    }
    if find_by_email(db, &input.email).await?.is_some() {
        return Err(CrmError::Validation(format!(
            "a client with email '{}' already exists",
            input.email
        )));
    }

    let now = chrono::Utc::now();
    let new_client = clients::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        company_name: Set(input.company_name),
        creation_date: Set(now),
        last_update_date: Set(now),
        commercial_contact_id: Set(commercial_contact_id),
        ..Default::default()
    };

    let client = new_client.insert(db).await?;
    tracing::info!(
        client_id = client.id,
        commercial_contact_id,
        "client created"
    );
    Ok(client)
}

/// Fetch a single client by ID.
pub async fn get_client_by_id(db: &DatabaseConnection, id: i32) -> CrmResult<clients::Model> {
    clients::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(CrmError::NotFound("client", id))
}

/// Update an existing client inside one transaction.
///
/// `last_update_date` is refreshed here, explicitly, as part of the same
/// commit as the field changes.
pub async fn update_client(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateClient,
) -> CrmResult<clients::Model> {
    let txn = db.begin().await?;

    let client = clients::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(CrmError::NotFound("client", id))?;

    if let Some(name) = &input.name {
        if *name != client.name && find_by_name(db, name).await?.is_some() {
            return Err(CrmError::Validation(format!(
                "a client named '{name}' already exists"
            )));
        }
    }
    if let Some(email) = &input.email {
        if *email != client.email && find_by_email(db, email).await?.is_some() {
            return Err(CrmError::Validation(format!(
                "a client with email '{email}' already exists"
            )));
        }
    }

    let mut active: clients::ActiveModel = client.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(email) = input.email {
        active.email = Set(email);
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(company_name) = input.company_name {
        active.company_name = Set(Some(company_name));
    }
    active.last_update_date = Set(chrono::Utc::now());

    let updated = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(client_id = updated.id, "client updated");
    Ok(updated)
}

/// Delete a client by ID.
pub async fn delete_client(db: &DatabaseConnection, id: i32) -> CrmResult<()> {
    let result = clients::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CrmError::NotFound("client", id));
    }
    tracing::info!(client_id = id, "client deleted");
    Ok(())
}

pub async fn find_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> CrmResult<Option<clients::Model>> {
    Ok(clients::Entity::find()
        .filter(clients::Column::Name.eq(name))
        .one(db)
        .await?)
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> CrmResult<Option<clients::Model>> {
    Ok(clients::Entity::find()
        .filter(clients::Column::Email.eq(email))
        .one(db)
        .await?)
}
