pub mod administration;
pub mod auth;
pub mod commercial;
pub mod support;
pub mod user;

use clap::{Args, Parser, Subcommand};
use sea_orm::DatabaseConnection;

use crate::auth::session::{Session, SessionStore};
use crate::error::{CrmError, CrmResult};

#[derive(Parser)]
#[command(name = "crm", about = "Role-gated CRM for clients, contracts and events", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Commands grouped by role domain. Field values may be passed as flags;
/// missing required fields are prompted for interactively.
#[derive(Subcommand)]
pub enum Commands {
    /// User management.
    #[command(subcommand)]
    User(UserCommands),
    /// Login, logout and session inspection.
    #[command(subcommand)]
    Auth(AuthCommands),
    /// Client and event creation (COMMERCIAL role).
    #[command(subcommand)]
    Commercial(CommercialCommands),
    /// Contract management (ADMINISTRATION role).
    #[command(subcommand)]
    Administration(AdministrationCommands),
    /// Event assignment and maintenance (SUPPORT role).
    #[command(subcommand)]
    Support(SupportCommands),
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user with a role and a hashed password.
    Add(AddUserArgs),
}

#[derive(Args)]
pub struct AddUserArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, help = "Clear-text password, hashed before storage")]
    pub password: Option<String>,
    #[arg(long, help = "COMMERCIAL, ADMINISTRATION or SUPPORT")]
    pub role: Option<String>,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Authenticate and persist the session locally.
    Login(LoginArgs),
    /// Remove the persisted session.
    Logout,
    /// Show who is currently logged in.
    Whoami,
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum CommercialCommands {
    /// Add a new client owned by the logged-in commercial.
    AddClient(AddClientArgs),
    /// Update a client you are responsible for.
    UpdateClient(UpdateClientArgs),
    /// Delete a client you are responsible for.
    DeleteClient(DeleteClientArgs),
    /// Add an event to a signed and paid contract of one of your clients.
    AddEvent(AddEventArgs),
}

#[derive(Args)]
pub struct AddClientArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
}

#[derive(Args)]
pub struct UpdateClientArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
}

#[derive(Args)]
pub struct DeleteClientArgs {
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct AddEventArgs {
    #[arg(long)]
    pub contract_id: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, inside the contract window")]
    pub start_date: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, inside the contract window")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub attendees: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum AdministrationCommands {
    /// Create a contract for a client without one in progress.
    AddContract(AddContractArgs),
    /// Update a contract you authored.
    UpdateContract(UpdateContractArgs),
    /// Delete a contract you authored.
    DeleteContract(DeleteContractArgs),
}

#[derive(Args)]
pub struct AddContractArgs {
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, not in the past")]
    pub start_date: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, after the start date")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long, help = "yes or no")]
    pub signed: Option<String>,
    #[arg(long, help = "yes or no")]
    pub payment_received: Option<String>,
}

#[derive(Args)]
pub struct UpdateContractArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long, help = "EN_COURS or TERMINE")]
    pub status: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, not in the past")]
    pub start_date: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, after the start date")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long, help = "yes or no")]
    pub signed: Option<String>,
    #[arg(long, help = "yes or no")]
    pub payment_received: Option<String>,
}

#[derive(Args)]
pub struct DeleteContractArgs {
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Subcommand)]
pub enum SupportCommands {
    /// Claim an unassigned event as its support contact.
    AssignEvent(AssignEventArgs),
    /// Update an event assigned to you.
    UpdateEvent(UpdateEventArgs),
    /// Delete an event assigned to you.
    DeleteEvent(DeleteEventArgs),
}

#[derive(Args)]
pub struct AssignEventArgs {
    #[arg(long)]
    pub event_id: Option<String>,
}

#[derive(Args)]
pub struct UpdateEventArgs {
    #[arg(long)]
    pub event_id: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, inside the contract window")]
    pub start_date: Option<String>,
    #[arg(long, help = "YYYY-MM-DD, inside the contract window")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub attendees: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct DeleteEventArgs {
    #[arg(long)]
    pub event_id: Option<String>,
}

/// Load the persisted session or fail the command: every privileged
/// operation receives the session as an explicit value from here.
pub fn current_session(store: &SessionStore) -> CrmResult<Session> {
    store.load().ok_or_else(|| {
        CrmError::PermissionDenied("no user is currently logged in".to_string())
    })
}

/// Route a parsed command to its handler.
pub async fn run(
    command: Commands,
    db: &DatabaseConnection,
    store: &SessionStore,
) -> CrmResult<()> {
    match command {
        Commands::User(UserCommands::Add(args)) => user::add_user(db, args).await,

        Commands::Auth(AuthCommands::Login(args)) => auth::login(db, store, args).await,
        Commands::Auth(AuthCommands::Logout) => auth::logout(store),
        Commands::Auth(AuthCommands::Whoami) => auth::whoami(store),

        Commands::Commercial(cmd) => {
            let session = current_session(store)?;
            match cmd {
                CommercialCommands::AddClient(args) => {
                    commercial::add_client(db, &session, args).await
                }
                CommercialCommands::UpdateClient(args) => {
                    commercial::update_client(db, &session, args).await
                }
                CommercialCommands::DeleteClient(args) => {
                    commercial::delete_client(db, &session, args).await
                }
                CommercialCommands::AddEvent(args) => {
                    commercial::add_event(db, &session, args).await
                }
            }
        }

        Commands::Administration(cmd) => {
            let session = current_session(store)?;
            match cmd {
                AdministrationCommands::AddContract(args) => {
                    administration::add_contract(db, &session, args).await
                }
                AdministrationCommands::UpdateContract(args) => {
                    administration::update_contract(db, &session, args).await
                }
                AdministrationCommands::DeleteContract(args) => {
                    administration::delete_contract(db, &session, args).await
                }
            }
        }

        Commands::Support(cmd) => {
            let session = current_session(store)?;
            match cmd {
                SupportCommands::AssignEvent(args) => {
                    support::assign_event(db, &session, args).await
                }
                SupportCommands::UpdateEvent(args) => {
                    support::update_event(db, &session, args).await
                }
                SupportCommands::DeleteEvent(args) => {
                    support::delete_event(db, &session, args).await
                }
            }
        }
    }
}
