use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::AppState;

// Messaggi fissi mostrati al client quando la sorgente esterna fallisce.
const SOURCE_UNAVAILABLE: &str = "countries service unavailable";
const NO_COUNTRIES: &str = "no countries found";

/// Costruisce l'URL upstream a partire dalla base e dai segmenti di percorso.
/// I segmenti vengono percent-encodati: i nomi dei paesi possono contenere spazi.
pub fn countries_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

// Inoltra la richiesta alla sorgente esterna e passa il corpo JSON così com'è.
// Niente timeout né retry: un fallimento arriva al client come messaggio fisso.
async fn proxy(state: &AppState, url: String) -> Result<Json<Value>, (StatusCode, String)> {
    info!("proxying countries request to {}", url);
    let resp = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, SOURCE_UNAVAILABLE.to_string()))?;
    if !resp.status().is_success() {
        return Err((StatusCode::NOT_FOUND, NO_COUNTRIES.to_string()));
    }
    let body: Value = resp
        .json()
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, SOURCE_UNAVAILABLE.to_string()))?;
    Ok(Json(body))
}

/// Handler per GET /api/countries
pub async fn list_countries(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    proxy(&state, countries_url(&state.countries_base_url, &["all"])).await
}

/// Handler per GET /api/countries/search/:name
pub async fn search_countries(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    proxy(&state, countries_url(&state.countries_base_url, &["name", &name])).await
}

/// Handler per GET /api/countries/region/:region
pub async fn countries_by_region(
    Extension(state): Extension<Arc<AppState>>,
    Path(region): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    proxy(&state, countries_url(&state.countries_base_url, &["region", &region])).await
}
