use dice_ranking::{
    game::repository::InMemoryMatchRepository, player::repository::InMemoryPlayerRepository,
    AppError, AppState, GameConfig,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dice_ranking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Dice session failed");
        std::process::exit(1);
    }
}

/// Registers every name given on the command line, plays the configured number
/// of rounds for each and logs the resulting rankings
async fn run() -> Result<(), AppError> {
    let config = GameConfig::new();
    info!(rounds = config.rounds, "Starting dice session");

    let state = AppState::new(
        Arc::new(InMemoryPlayerRepository::new()),
        Arc::new(InMemoryMatchRepository::new()),
        config.clone(),
    );

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names.push(String::new());
    }

    for name in &names {
        let player = state.player_service.create_player(Some(name.as_str())).await?;
        for _ in 0..config.rounds {
            state.game_service.play_match(&player.id).await?;
        }
    }

    let players = state.player_service.list_players().await?;
    let global = state.stats_service.global_win_rate().await?;
    let best = state.stats_service.best_players().await?;
    let worst = state.stats_service.worst_players().await?;

    info!(players = %to_json(&players), "Players");
    info!(global = %to_json(&global), "Global win rate");
    info!(best = %to_json(&best), "Best players");
    info!(worst = %to_json(&worst), "Worst players");

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
