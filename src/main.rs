//! Entry point: parse CLI, set up logging and dispatch.

use anyhow::Context;
use clap::Parser;
use nba_stats::{
    analytics::game_log::GameLogFilters,
    api::{self, ApiState},
    cli::{resolve_bind_addr, Commands, GetCmd, NbaStats},
    commands::{
        player_games::{handle_player_games, PlayerGamesParams},
        player_profile::handle_player_stats,
        suggestions::handle_suggestions,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaStats::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match app.command {
        Commands::Serve { source, bind } => {
            let state = ApiState {
                source: source.build_source()?,
            };
            let bind_addr = resolve_bind_addr(bind);
            let listener = tokio::net::TcpListener::bind(&bind_addr)
                .await
                .with_context(|| format!("failed to bind {bind_addr}"))?;
            api::serve(listener, state).await?;
        }

        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerGames {
                source,
                name,
                season,
                location,
                vs,
                include_consistency,
            } => {
                let source = source.build_source()?;
                let params = PlayerGamesParams {
                    name,
                    season,
                    filters: GameLogFilters {
                        location,
                        opponent: vs,
                        include_consistency,
                    },
                };
                let log = handle_player_games(source.as_ref(), &params).await?;
                for row in &log.rejected {
                    eprintln!("skipped row {}: {}", row.index, row.reason);
                }
                println!("{}", serde_json::to_string_pretty(&log.rows)?);
            }

            GetCmd::Suggestions { source, query } => {
                let source = source.build_source()?;
                let names = handle_suggestions(source.as_ref(), &query).await?;
                println!("{}", serde_json::to_string_pretty(&names)?);
            }

            GetCmd::PlayerStats { source, name } => {
                let source = source.build_source()?;
                let seasons = handle_player_stats(source.as_ref(), &name).await?;
                println!("{}", serde_json::to_string_pretty(&seasons)?);
            }
        },
    }

    Ok(())
}
