use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{birds, health};
use crate::state::AppState;

/// Create the main application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Health routes
    let health_routes = Router::new().route("/health", get(health::health_check));

    // Bird routes - /birds/
    let bird_routes = Router::new()
        .route("/birds/", post(birds::create_bird))
        .route("/birds/", get(birds::list_birds))
        .route("/birds/:bird_id", get(birds::get_bird))
        .route("/birds/:bird_id", put(birds::update_bird))
        .route("/birds/:bird_id", delete(birds::delete_bird))
        .route("/birds/:first_id/:second_id", put(birds::swap_bird_names));

    // Main router combining all routes
    Router::new()
        .merge(health_routes)
        .merge(bird_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
