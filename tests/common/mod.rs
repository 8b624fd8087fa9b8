#![allow(dead_code)]

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

use event_crm::auth::session::Session;
use event_crm::db;
use event_crm::models::clients::{self, CreateClient};
use event_crm::models::contracts::{self, CreateContract};
use event_crm::models::events::{self, CreateEvent};
use event_crm::models::users::{self, CreateUser, Role};

/// Open a file-backed SQLite database in a temp directory and apply all
/// migrations. The `TempDir` must stay alive for the test's duration.
pub async fn setup_db() -> (DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("crm.sqlite").display()
    );
    let db = Database::connect(&url)
        .await
        .expect("connect to test database");
    Migrator::up(&db, None).await.expect("apply migrations");
    (db, dir)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Seed a user directly through the repository. The stored password is a
/// placeholder, not a verifiable hash — login tests go through the command
/// layer instead.
pub async fn seed_user(db: &DatabaseConnection, username: &str, role: Role) -> users::Model {
    db::users::insert_user(
        db,
        CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role,
            password: "$argon2id$placeholder".to_string(),
        },
    )
    .await
    .expect("seed user")
}

pub fn session_for(user: &users::Model) -> Session {
    Session {
        user_id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role,
    }
}

pub async fn seed_client(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    commercial: &users::Model,
) -> clients::Model {
    db::clients::insert_client(
        db,
        CreateClient {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company_name: None,
        },
        commercial.id,
    )
    .await
    .expect("seed client")
}

pub async fn seed_contract(
    db: &DatabaseConnection,
    client: &clients::Model,
    author: &users::Model,
    start: NaiveDate,
    end: NaiveDate,
    is_signed: bool,
    payment_received: bool,
    today: NaiveDate,
) -> contracts::Model {
    db::contracts::insert_contract(
        db,
        CreateContract {
            client_id: client.id,
            start_date: start,
            end_date: end,
            price: 1000,
            is_signed,
            payment_received,
        },
        author.id,
        today,
    )
    .await
    .expect("seed contract")
}

pub async fn seed_event(
    db: &DatabaseConnection,
    contract: &contracts::Model,
    start: NaiveDate,
    end: NaiveDate,
) -> events::Model {
    db::events::insert_event(
        db,
        CreateEvent {
            contract_id: contract.id,
            start_date: start,
            end_date: end,
            attendees: 10,
            notes: None,
        },
    )
    .await
    .expect("seed event")
}
