use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

use crate::{controllers, countries, health_with_pool, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health_with_pool(&state.pool).await
        }))
        .route("/api/users", post(controllers::create_user))
        .route("/api/users/:id", get(controllers::get_user))
        .route(
            "/api/wishlist/:user_id",
            get(controllers::list_wishlist).post(controllers::add_wishlist_item),
        )
        .route(
            "/api/wishlist/:user_id/:country_code",
            put(controllers::update_wishlist_item).delete(controllers::delete_wishlist_item),
        )
        .route("/api/countries", get(countries::list_countries))
        .route("/api/countries/search/:name", get(countries::search_countries))
        .route("/api/countries/region/:region", get(countries::countries_by_region))
        .layer(Extension(state))
}
