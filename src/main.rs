//! Library Console - interactive library management

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_console::{
    config::AppConfig,
    console::{Session, SessionEnd},
    repository::Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; stdout belongs to the menus
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_console={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting Library Console v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::from_config(&config.storage, &config.admin)?;

    let stdin = io::stdin();
    let mut session = Session::new(&mut library, stdin.lock(), io::stdout());
    match session.run()? {
        SessionEnd::Quit => tracing::info!("Session ended by manager"),
        SessionEnd::LoginFailed => tracing::info!("Session ended after failed login"),
        SessionEnd::InputClosed => tracing::info!("Session ended at end of input"),
    }

    Ok(())
}
