//! Dogclub Client - interactive shell
//!
//! Reads one command per line from stdin and prints the resulting screen
//! position. Logs go to stderr so piped scripts keep a clean stdout.

use dogclub_client::data::MockCatalog;
use dogclub_client::nav::PageRegistry;
use dogclub_client::session::DemoAuthenticator;
use dogclub_client::shell::Shell;
use dogclub_client::config;

use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dogclub_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        "Starting Dogclub Client v{} ({})",
        env!("DOGCLUB_VERSION"),
        env!("DOGCLUB_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, render: {}, strict selection: {}",
        config.render.as_str(),
        config.strict_selection
    );

    let mut shell = Shell::new(
        DemoAuthenticator::new(config.accounts),
        MockCatalog::new(),
        PageRegistry::new(config.strict_selection),
        config.render,
    );

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    if interactive {
        writeln!(stdout, "Dogclub Client v{}. Type 'help' for commands.", env!("DOGCLUB_VERSION"))?;
    }

    shell.serve(stdin.lock(), &mut stdout, interactive)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
