use sqlx::PgPool;

use crate::dto::vehicle_dto::{ApiResponse, CreateVehicleRequest, VehicleListResponse};
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{
    coerce_numeric, is_truthy, validate_not_empty, validate_positive, validate_range,
};

/// Rango permitido para el año del vehículo
pub const MIN_YEAR: i32 = 1950;
pub const MAX_YEAR: i32 = 2050;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<VehicleListResponse, AppError> {
        tracing::info!("📋 Listando vehículos");
        let vehicles = self.repository.list().await?;
        Ok(VehicleListResponse::new(vehicles))
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        let new_vehicle = validate_request(request)?;

        tracing::info!(
            "➕ Registrando vehículo: {} {} ({})",
            new_vehicle.brand,
            new_vehicle.model,
            new_vehicle.year
        );

        let vehicle = self.repository.insert(new_vehicle).await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<ApiResponse<Vehicle>, AppError> {
        let id = parse_id(raw_id)?;

        tracing::info!("🗑️ Eliminando vehículo id {}", id);

        let vehicle = self
            .repository
            .delete_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}

/// Validar el request de creación en el orden del contrato:
/// campos obligatorios, luego precio, luego año. Nada de esto toca el store.
pub fn validate_request(request: CreateVehicleRequest) -> Result<NewVehicle, AppError> {
    let model = match request.model {
        Some(ref m) if validate_not_empty(m).is_ok() => m.trim().to_string(),
        _ => return Err(required_err()),
    };
    let brand = match request.brand {
        Some(ref b) if validate_not_empty(b).is_ok() => b.trim().to_string(),
        _ => return Err(required_err()),
    };
    let year_value = match request.year {
        Some(ref y) if is_truthy(y) => y,
        _ => return Err(required_err()),
    };
    let price_value = match request.price {
        Some(ref p) if is_truthy(p) => p,
        _ => return Err(required_err()),
    };

    let price = coerce_numeric(price_value).ok_or_else(invalid_price_err)?;
    validate_positive(price).map_err(|_| invalid_price_err())?;

    // el rango se chequea antes de truncar, igual que el contrato original
    let year_num = coerce_numeric(year_value).ok_or_else(invalid_year_err)?;
    validate_range(year_num, f64::from(MIN_YEAR), f64::from(MAX_YEAR))
        .map_err(|_| invalid_year_err())?;
    let year = year_num as i32;

    // description vacía o ausente se guarda como NULL
    let description = request
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok(NewVehicle {
        model,
        brand,
        year,
        price,
        description,
    })
}

fn required_err() -> AppError {
    AppError::Validation("Campos obligatorios: model, brand, year y price".to_string())
}

fn invalid_price_err() -> AppError {
    AppError::Validation("Precio inválido".to_string())
}

fn invalid_year_err() -> AppError {
    AppError::Validation("Año inválido".to_string())
}

/// Parsear el path param `:id`; cualquier cosa no numérica es un 400.
/// Un id fraccionario se trunca al entero, igual que el contrato original.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    let invalid = || AppError::Validation("ID inválido".to_string());
    let numeric = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !numeric.is_finite() {
        return Err(invalid());
    }
    Ok(numeric as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateVehicleRequest {
        serde_json::from_value(body).expect("request JSON inválido en el test")
    }

    #[test]
    fn test_valid_request_is_coerced_and_trimmed() {
        let new_vehicle = validate_request(request(json!({
            "model": "  Civic ",
            "brand": "Honda",
            "year": "2022",
            "price": "95000.5",
            "description": "  Único dueño  "
        })))
        .expect("request válido rechazado");

        assert_eq!(new_vehicle.model, "Civic");
        assert_eq!(new_vehicle.brand, "Honda");
        assert_eq!(new_vehicle.year, 2022);
        assert_eq!(new_vehicle.price, 95000.5);
        assert_eq!(new_vehicle.description.as_deref(), Some("Único dueño"));
    }

    #[test]
    fn test_empty_description_becomes_null() {
        let new_vehicle = validate_request(request(json!({
            "model": "Civic",
            "brand": "Honda",
            "year": 2022,
            "price": 95000
        })))
        .unwrap();
        assert_eq!(new_vehicle.description, None);

        let new_vehicle = validate_request(request(json!({
            "model": "Civic",
            "brand": "Honda",
            "year": 2022,
            "price": 95000,
            "description": "   "
        })))
        .unwrap();
        assert_eq!(new_vehicle.description, None);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        for body in [
            json!({}),
            json!({"brand": "Honda", "year": 2022, "price": 95000}),
            json!({"model": "Civic", "year": 2022, "price": 95000}),
            json!({"model": "Civic", "brand": "Honda", "price": 95000}),
            json!({"model": "Civic", "brand": "Honda", "year": 2022}),
            json!({"model": "", "brand": "Honda", "year": 2022, "price": 95000}),
            json!({"model": "Civic", "brand": "Honda", "year": null, "price": 95000}),
            // cero cuenta como ausente, igual que en el contrato original
            json!({"model": "Civic", "brand": "Honda", "year": 2022, "price": 0}),
        ] {
            let err = validate_request(request(body)).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m.contains("obligatorios")),
                "esperaba error de campos obligatorios, fue: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        for price in [json!("abc"), json!("-100"), json!(-95000)] {
            let err = validate_request(request(json!({
                "model": "Civic",
                "brand": "Honda",
                "year": 2022,
                "price": price
            })))
            .unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == "Precio inválido"),
                "esperaba precio inválido, fue: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_year_is_rejected() {
        for year in [json!(1800), json!(2051), json!("mil novecientos")] {
            let err = validate_request(request(json!({
                "model": "X",
                "brand": "Y",
                "year": year,
                "price": 1000
            })))
            .unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == "Año inválido"),
                "esperaba año inválido, fue: {err}"
            );
        }
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        for year in [1950, 2050] {
            assert!(validate_request(request(json!({
                "model": "X",
                "brand": "Y",
                "year": year,
                "price": 1000
            })))
            .is_ok());
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        // un id fraccionario se trunca, no se rechaza
        assert_eq!(parse_id("12.5").unwrap(), 12);
        assert!(matches!(
            parse_id("abc").unwrap_err(),
            AppError::Validation(ref m) if m == "ID inválido"
        ));
        assert!(parse_id("NaN").is_err());
        assert!(parse_id("inf").is_err());
        assert!(parse_id("").is_err());
    }
}
