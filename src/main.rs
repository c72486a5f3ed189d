//! Account Ledger service
//!
//! ```text
//! HTTP ──▶ gateway ──▶ AccountService ──▶ {AccountRepository, TransferEngine} ──▶ PostgreSQL
//!                         (one unit of work per call)
//! ```
//!
//! Usage: `account_ledger [--env <name>] [--port <port>]`

use std::sync::Arc;

use account_ledger::config::AppConfig;
use account_ledger::db::{Database, schema};
use account_ledger::gateway::{self, AppState, RetryPolicy};
use account_ledger::logging::init_logging;
use account_ledger::service::AccountService;

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    get_arg(&["--port"]).and_then(|p| p.parse().ok())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting account ledger {} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let db = Database::connect(&app_config.postgres).await?;
    schema::create_schema(db.pool()).await?;

    let state = Arc::new(AppState::new(
        AccountService::new(db.clone()),
        RetryPolicy::from(&app_config.gateway.retry),
    ));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let addr = format!("{}:{}", app_config.gateway.host, port);
    let served = gateway::run_server(&addr, state, shutdown_signal()).await;

    if app_config.ledger.ephemeral_schema {
        if let Err(e) = schema::drop_schema(db.pool()).await {
            tracing::error!("Failed to drop ledger schema: {}", e);
        }
    }
    db.pool().close().await;

    served
}
