//! Routers de la API
//!
//! Este módulo arma el router completo: endpoints de la API, archivos
//! estáticos del frontend y el catch-all 404.

pub mod vehicle_routes;

use axum::{
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Las cuatro rutas de la API, tal como las reporta el catch-all
pub const API_ROUTES: [&str; 4] = [
    "GET /api/test",
    "GET /api/vehicles",
    "POST /api/vehicles",
    "DELETE /api/vehicles/:id",
];

/// Armar el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    // Todo lo que no matchea la API se intenta servir desde el directorio
    // estático; si tampoco existe ahí, cae al 404 con el listado de rutas.
    // El catch-all aplica a cualquier método, no solo GET.
    let static_service = ServeDir::new(&state.config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    Router::new()
        .route("/api/test", get(test_endpoint).fallback(route_not_found))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "API funcionando!",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Catch-all para rutas desconocidas; también responde a métodos no
/// soportados sobre paths conocidos (un PUT a la API es "ruta no
/// encontrada", no un 405)
pub(crate) async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Ruta no encontrada",
            "routes": API_ROUTES,
        })),
    )
}
