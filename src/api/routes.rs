use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue, Response},
    middleware::map_response,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    analytics::game_log::GameLogFilters,
    cli::types::{LocationFilter, Season, TeamAbbr},
    commands::{
        player_games::{handle_player_games, PlayerGamesParams},
        player_profile::{handle_player_bio, handle_player_seasons, handle_player_stats},
        require_param,
        suggestions::handle_suggestions,
    },
    nba::{
        types::{PlayerBio, SeasonTotals},
        StatsSource,
    },
    Result,
};

/// Response header carrying the number of game rows dropped for unreadable dates.
pub const REJECTED_ROWS_HEADER: &str = "x-rejected-rows";

#[derive(Clone)]
pub struct ApiState {
    pub source: Arc<dyn StatsSource>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/player-stats", get(get_player_stats))
        .route("/player-seasons", get(get_player_seasons))
        .route("/player-bio", get(get_player_bio))
        .route("/player-suggestions", get(get_player_suggestions))
        .route("/player-games", get(get_player_games))
        .layer(map_response(allow_any_origin))
        .with_state(state)
}

async fn allow_any_origin<B>(mut response: Response<B>) -> Response<B> {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

// ---------------------------------------------------------------------------
// Query param structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub query: Option<String>,
}

/// Raw `/player-games` parameters; validated by [`GamesQuery::into_params`].
#[derive(Debug, Default, Deserialize)]
pub struct GamesQuery {
    pub name: Option<String>,
    pub season: Option<String>,
    pub location: Option<String>,
    pub vs: Option<String>,
    pub include_consistency: Option<String>,
}

impl GamesQuery {
    pub fn into_params(self) -> Result<PlayerGamesParams> {
        let name = require_param("name", self.name)?;

        let season = match non_blank(self.season) {
            Some(s) => s.parse::<Season>()?,
            None => Season::default(),
        };
        let location = match non_blank(self.location) {
            Some(l) => l.parse::<LocationFilter>()?,
            None => LocationFilter::Any,
        };
        let opponent = non_blank(self.vs)
            .map(|team| team.parse::<TeamAbbr>())
            .transpose()?;
        let include_consistency = self
            .include_consistency
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true"));

        Ok(PlayerGamesParams {
            name,
            season,
            filters: GameLogFilters {
                location,
                opponent,
                include_consistency,
            },
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> &'static str {
    "Hello World!"
}

async fn get_player_stats(
    State(state): State<ApiState>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<SeasonTotals>>> {
    let name = require_param("name", params.name)?;
    let seasons = handle_player_stats(state.source.as_ref(), &name).await?;
    info!(player = %name, seasons = seasons.len(), "career stats served");
    Ok(Json(seasons))
}

async fn get_player_seasons(
    State(state): State<ApiState>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<String>>> {
    let name = require_param("name", params.name)?;
    let seasons = handle_player_seasons(state.source.as_ref(), &name).await?;
    Ok(Json(seasons))
}

async fn get_player_bio(
    State(state): State<ApiState>,
    Query(params): Query<NameQuery>,
) -> Result<Json<PlayerBio>> {
    let name = require_param("name", params.name)?;
    let bio = handle_player_bio(state.source.as_ref(), &name).await?;
    Ok(Json(bio))
}

async fn get_player_suggestions(
    State(state): State<ApiState>,
    Query(params): Query<SuggestionQuery>,
) -> Result<Json<Vec<String>>> {
    let query = params.query.unwrap_or_default();
    let names = handle_suggestions(state.source.as_ref(), &query).await?;
    Ok(Json(names))
}

async fn get_player_games(
    State(state): State<ApiState>,
    Query(query): Query<GamesQuery>,
) -> Result<impl IntoResponse> {
    let params = query.into_params()?;
    let log = handle_player_games(state.source.as_ref(), &params).await?;

    for row in &log.rejected {
        warn!(
            player = %params.name,
            season = %params.season,
            index = row.index,
            game_id = row.game_id.as_deref().unwrap_or("-"),
            reason = %row.reason,
            "skipped game row"
        );
    }
    info!(
        player = %params.name,
        season = %params.season,
        location = %params.filters.location,
        rows = log.rows.len(),
        rejected = log.rejected.len(),
        "game log served"
    );

    Ok((
        [(REJECTED_ROWS_HEADER, log.rejected.len().to_string())],
        Json(log.rows),
    ))
}
