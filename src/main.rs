use anyhow::Result;
use mediagrab::{app_state::AppState, bot, config::Config, health};
use std::sync::Arc;
use teloxide::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration; anything missing or malformed aborts startup here.
    let config = Config::from_env()?;

    // Create database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(config.database_url())
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = Arc::new(AppState::new(&config, pool)?);

    // Liveness endpoint runs beside the dispatcher and stops with it.
    let shutdown = CancellationToken::new();
    let health_handle = tokio::spawn(health::serve(config.port(), shutdown.clone()));

    let bot = Bot::new(config.bot_token());
    info!("starting dispatcher");
    Dispatcher::builder(bot, bot::schema())
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            warn!(update_id = ?update.id, "unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    shutdown.cancel();
    let _ = health_handle.await;
    info!("shut down cleanly");
    Ok(())
}
