use sqlx::PgPool;

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::{store_error, AppError};

/// Repositorio de vehículos: interfaz estrecha sobre el store.
/// Toda la persistencia pasa por acá; los handlers no tocan el pool.
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar todos los vehículos, más recientes primero.
    /// El id desempata timestamps idénticos para que el orden sea estable.
    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Error al listar vehículos", e))?;

        Ok(vehicles)
    }

    /// Insertar un vehículo ya validado; el store asigna id y created_at
    pub async fn insert(&self, new_vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (model, brand, year, price, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new_vehicle.model)
        .bind(new_vehicle.brand)
        .bind(new_vehicle.year)
        .bind(new_vehicle.price)
        .bind(new_vehicle.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Error al registrar vehículo", e))?;

        Ok(vehicle)
    }

    /// Borrar por id y devolver la fila eliminada.
    /// `None` significa que no existía; dos deletes concurrentes del mismo
    /// id son válidos, el segundo simplemente no encuentra fila.
    pub async fn delete_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "DELETE FROM vehicles WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Error al eliminar vehículo", e))?;

        Ok(vehicle)
    }
}
