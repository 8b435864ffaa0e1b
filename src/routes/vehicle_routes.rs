use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{ApiResponse, CreateVehicleRequest, VehicleListResponse};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    // Métodos no registrados caen al catch-all 404, como en el contrato
    Router::new()
        .route(
            "/",
            get(list_vehicles)
                .post(create_vehicle)
                .fallback(super::route_not_found),
        )
        .route("/:id", delete(delete_vehicle).fallback(super::route_not_found))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<Vehicle>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

// El id llega como String para que un valor no numérico produzca el 400
// del contrato y no el rechazo genérico del extractor
async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
