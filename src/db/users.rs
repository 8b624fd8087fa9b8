use sea_orm::*;

use crate::error::{CrmError, CrmResult};
use crate::models::users::{self, CreateUser};

/// Insert a new user after checking username and email uniqueness.
///
/// The pre-checks give readable messages; the unique indexes on the table
/// still back them up at the storage boundary.
pub async fn insert_user(db: &DatabaseConnection, input: CreateUser) -> CrmResult<users::Model> {
    if find_by_username(db, &input.username).await?.is_some() {
        return Err(CrmError::Validation(format!(
            "the username '{}' is already taken",
            input.username
        )));
    }
    if find_by_email(db, &input.email).await?.is_some() {
        return Err(CrmError::Validation(format!(
            "the email '{}' is already used by another user",
            input.email
        )));
    }

    let new_user = users::ActiveModel {
        username: Set(input.username),
        email: Set(input.email),
        role: Set(input.role),
        password: Set(input.password),
        ..Default::default()
    };

    let user = new_user.insert(db).await?;
    tracing::info!(user_id = user.id, role = %user.role, "user created");
    Ok(user)
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(db: &DatabaseConnection, id: i32) -> CrmResult<users::Model> {
    users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(CrmError::NotFound("user", id))
}

/// Look a user up by email (used by login, where "not found" is not an error).
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> CrmResult<Option<users::Model>> {
    Ok(users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> CrmResult<Option<users::Model>> {
    Ok(users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?)
}
