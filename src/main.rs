//! agentsim - simulator entry point.
//!
//! Creates a task on the local task board, simulates the agent roster, and
//! submits the encrypted logs.

use agentsim::{agents, config::Config, RunOutcome};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // The flow is strictly sequential, so a current-thread runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentsim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!("task board at {}", config.base_url);

    match agents::run(&config).await? {
        RunOutcome::Completed(response) => {
            info!("logs submitted, board response follows");
            println!("{}", response);
        }
        RunOutcome::Rejected { response } => {
            warn!("task creation rejected by the board: {}", response);
        }
    }

    Ok(())
}
