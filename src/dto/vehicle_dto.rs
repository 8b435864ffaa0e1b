use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::vehicle::Vehicle;

// Request para registrar un vehículo.
// `year` y `price` se reciben como Value crudo para aceptar tanto números
// JSON como strings numéricos; la coerción y las respuestas 400 con mensaje
// descriptivo las hace el controller (un campo mal tipado no debe producir
// el 422 del framework).
#[derive(Debug, Default, Deserialize)]
pub struct CreateVehicleRequest {
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<String>,
}

// Response genérica con envelope {success, message?, data?}
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }
}

// Response del listado: {success, total, data}
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub success: bool,
    pub total: usize,
    pub data: Vec<Vehicle>,
}

impl VehicleListResponse {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            success: true,
            total: vehicles.len(),
            data: vehicles,
        }
    }
}
