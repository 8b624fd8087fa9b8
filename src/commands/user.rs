use sea_orm::DatabaseConnection;

use crate::auth::password;
use crate::commands::AddUserArgs;
use crate::db;
use crate::error::{CrmError, CrmResult};
use crate::models::users::CreateUser;
use crate::validation;

/// Register a new user. Username and email must be unused; the clear-text
/// password is hashed before it reaches the repository.
pub async fn add_user(db: &DatabaseConnection, args: AddUserArgs) -> CrmResult<()> {
    let username = validation::resolve(args.username, "Username", validation::parse_nonempty)?;
    let email = validation::resolve(args.email, "Email", validation::parse_email)?;
    let password = validation::resolve(args.password, "Password", validation::parse_password)?;
    let role = validation::resolve(args.role, "Role", validation::parse_role)?;

    let hashed = password::hash_password(&password)
        .map_err(|e| CrmError::Storage(format!("unable to hash the password: {e}")))?;

    let user = db::users::insert_user(
        db,
        CreateUser {
            username,
            email,
            role,
            password: hashed,
        },
    )
    .await?;

    println!(
        "User {} added successfully with the {} role.",
        user.username, user.role
    );
    Ok(())
}
