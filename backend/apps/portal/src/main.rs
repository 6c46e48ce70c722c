//! Portal Entry Point
//!
//! Wires the session holder to file-backed local storage and runs the
//! interactive portal shell over stdin.
//! Uses `anyhow` for startup errors; auth errors surface as notifications.

mod shell;

use std::sync::Arc;

use auth::{AuthConfig, DemoDirectory, LocalSessionStore, SessionHolder};
use platform::config::{env_duration_ms, env_or};
use platform::storage::FileStore;
use platform::timer::TokioDelay;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shell::{Command, Flow, Shell};

fn load_config() -> anyhow::Result<AuthConfig> {
    let defaults = AuthConfig::default();
    Ok(AuthConfig {
        login_delay: env_duration_ms("PORTAL_LOGIN_DELAY_MS", defaults.login_delay)?,
        federated_login_delay: env_duration_ms(
            "PORTAL_FEDERATED_DELAY_MS",
            defaults.federated_login_delay,
        )?,
        ..defaults
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout belongs to the shell
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(load_config()?);
    let storage_dir = env_or("PORTAL_STORAGE_DIR", ".portal-storage");
    let storage = Arc::new(FileStore::open(&storage_dir)?);

    tracing::info!(
        storage_dir = %storage_dir,
        login_delay_ms = config.login_delay_ms(),
        federated_login_delay_ms = config.federated_login_delay_ms(),
        "Portal starting"
    );

    let session_store = Arc::new(LocalSessionStore::new(
        storage,
        config.session_storage_key.clone(),
    ));
    let holder = SessionHolder::start(
        Arc::new(DemoDirectory::seeded()),
        session_store,
        Arc::new(TokioDelay),
        config,
    )
    .await;

    let mut shell = Shell::new(holder);
    let mut out = std::io::stdout();
    shell.open(&mut out)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if shell.handle(Command::parse(&line), &mut out).await? == Flow::Quit {
            break;
        }
    }

    tracing::info!(location = shell.location(), "Portal stopped");
    Ok(())
}
