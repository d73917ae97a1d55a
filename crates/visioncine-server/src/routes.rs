//! API route handlers
//!
//! Each handler fetches through the shared scraper and wraps the result in
//! the `success: true` envelope; failures are handled uniformly by
//! [`ApiError`](crate::error::ApiError).

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use visioncine_core::{CatalogItem, Category};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const VIDEO_AUTH_NOTE: &str = "Video URL may require additional authentication";

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    environment: String,
}

/// GET /health — liveness probe, never fails
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: timestamp(),
        environment: state.environment.clone(),
    })
}

/// GET / — human-readable route menu
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "VisionCine API",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": {
            "health": "/health",
            "test": "/api/test",
            "home": "/api/home",
            "search": "/api/search?q=movie_name",
            "video": "/api/video/:slug",
            "movies": "/api/movies",
            "series": "/api/series",
            "animes": "/api/animes",
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    success: bool,
    categories: Vec<Category>,
    timestamp: String,
}

/// GET /api/home — categorized front-page listing
pub async fn home(State(state): State<AppState>) -> ApiResult<Json<HomeResponse>> {
    let categories = state.scraper.home().await?;
    Ok(Json(HomeResponse {
        success: true,
        categories,
        timestamp: timestamp(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    success: bool,
    query: String,
    results: Vec<CatalogItem>,
    count: usize,
}

/// GET /api/search?q= — catalog search
///
/// Rejects a missing or empty `q` before any outbound request.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or(ApiError::MissingQuery)?;

    let results = state.scraper.search(&query).await?;
    let count = results.len();

    Ok(Json(SearchResponse {
        success: true,
        query,
        results,
        count,
    }))
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    success: bool,
    movies: Vec<CatalogItem>,
    count: usize,
}

/// GET /api/movies — movies listing
pub async fn movies(State(state): State<AppState>) -> ApiResult<Json<MoviesResponse>> {
    let movies = state.scraper.movies().await?;
    let count = movies.len();
    Ok(Json(MoviesResponse {
        success: true,
        movies,
        count,
    }))
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    success: bool,
    series: Vec<CatalogItem>,
    count: usize,
}

/// GET /api/series — TV series listing
pub async fn series(State(state): State<AppState>) -> ApiResult<Json<SeriesResponse>> {
    let series = state.scraper.series().await?;
    let count = series.len();
    Ok(Json(SeriesResponse {
        success: true,
        series,
        count,
    }))
}

#[derive(Debug, Serialize)]
pub struct AnimesResponse {
    success: bool,
    animes: Vec<CatalogItem>,
    count: usize,
}

/// GET /api/animes — animes listing
pub async fn animes(State(state): State<AppState>) -> ApiResult<Json<AnimesResponse>> {
    let animes = state.scraper.animes().await?;
    let count = animes.len();
    Ok(Json(AnimesResponse {
        success: true,
        animes,
        count,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    success: bool,
    player_link: String,
    video_url: Option<String>,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

/// GET /api/video/{slug} — two-hop video resolution
///
/// 404 when the watch page has no player link; a failed second hop leaves
/// `videoUrl` null with an explanatory note.
pub async fn video(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<VideoResponse>> {
    let resolution = state.scraper.resolve_video(&slug).await?;

    let note = resolution.video_url.is_none().then_some(VIDEO_AUTH_NOTE);

    Ok(Json(VideoResponse {
        success: true,
        player_link: resolution.player_link,
        video_url: resolution.video_url,
        slug,
        note,
    }))
}

#[derive(Debug, Serialize)]
pub struct TestResponse {
    success: bool,
    status: u16,
    message: &'static str,
}

/// GET /api/test — upstream connectivity probe
pub async fn test_connection(State(state): State<AppState>) -> ApiResult<Json<TestResponse>> {
    state.scraper.probe().await?;
    Ok(Json(TestResponse {
        success: true,
        status: 200,
        message: "Connection successful",
    }))
}
