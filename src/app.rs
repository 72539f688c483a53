//! Construcción del router de la aplicación

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_from_config;
use crate::routes;
use crate::state::AppState;

/// Crear el router completo con estado, CORS y trazas HTTP
pub fn create_app(state: AppState) -> Router {
    let cors = cors_from_config(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de vehículos funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
