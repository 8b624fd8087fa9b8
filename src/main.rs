use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use event_crm::auth::session::SessionStore;
use event_crm::commands::{self, Cli};
use event_crm::create_pool;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let db = create_pool().await;
    let store = SessionStore::from_env();

    match commands::run(cli.command, &db, &store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
