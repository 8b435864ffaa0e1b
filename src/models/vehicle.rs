//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente a la
//! tabla `vehicles` de PostgreSQL, y el payload validado de inserción.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload ya validado para insertar un vehículo.
/// Los strings llegan trimmed y `description` ya está normalizada a NULL
/// cuando viene vacía o ausente.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub price: f64,
    pub description: Option<String>,
}
