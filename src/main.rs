use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::database::{activities_repo::RosterStore, seed};
use activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // 2. Configuration
    let config = Config::from_env().context("invalid configuration")?;

    // 3. Seed the roster
    let activities = match &config.seed_file {
        Some(path) => seed::load_activities(path)?,
        None => seed::default_activities(),
    };
    info!(
        activities = activities.len(),
        capacity_policy = ?config.capacity_policy,
        "roster seeded"
    );
    let roster = RosterStore::new(activities);

    // 4. Routes
    let app = web::router(
        AppState::new(roster, config.capacity_policy),
        &config.static_dir,
    );

    // 5. Serve (one fallback port)
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}, trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("open http://{}/ for the signup page", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
