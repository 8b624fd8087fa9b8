use sea_orm::DatabaseConnection;

use crate::auth::password;
use crate::auth::session::{Session, SessionStore};
use crate::commands::LoginArgs;
use crate::db;
use crate::error::{CrmError, CrmResult};
use crate::validation;

/// Authenticate by email and password; on success persist the session.
///
/// A missing user and a wrong password produce the same message, so the
/// command does not reveal which emails exist.
pub async fn login(db: &DatabaseConnection, store: &SessionStore, args: LoginArgs) -> CrmResult<()> {
    let email = validation::resolve(args.email, "Email", validation::parse_email)?;
    let password = validation::resolve(args.password, "Password", validation::parse_nonempty)?;

    let user = db::users::find_by_email(db, &email).await?;
    match user {
        Some(user) if password::verify_password(&password, &user.password) => {
            store.save(&Session {
                user_id: user.id,
                username: user.username,
                email: user.email,
                role: user.role,
            })?;
            println!("Authentication successful.");
            Ok(())
        }
        _ => Err(CrmError::PermissionDenied(
            "incorrect email or password".to_string(),
        )),
    }
}

/// Remove the persisted session; reports when nobody was logged in.
pub fn logout(store: &SessionStore) -> CrmResult<()> {
    if store.clear()? {
        println!("Logout successful.");
    } else {
        println!("No user is currently logged in.");
    }
    Ok(())
}

/// Show the identity saved in the session file.
pub fn whoami(store: &SessionStore) -> CrmResult<()> {
    match store.load() {
        Some(session) => println!(
            "Logged in as {} <{}> with the {} role (user ID {}).",
            session.username, session.email, session.role, session.user_id
        ),
        None => println!("No user is currently logged in."),
    }
    Ok(())
}
