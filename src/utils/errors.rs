//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio y su conversión
//! al envelope JSON `{success: false, ...}` con el status HTTP apropiado.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Input inválido del cliente; nunca llega al store
    #[error("{0}")]
    Validation(String),

    /// El store reportó un error para una query
    #[error("{message}: {detail}")]
    Store { message: String, detail: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Cualquier fallo no anticipado por las variantes anteriores
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Envelope de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(msg) => {
                tracing::warn!("Validación fallida: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        message: Some(msg),
                        error: None,
                    },
                )
            }

            AppError::Store { message, detail } => {
                tracing::error!("❌ Error del store: {}: {}", message, detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        message: Some(message),
                        error: Some(detail),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Recurso no encontrado: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        success: false,
                        message: Some(msg),
                        error: None,
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        message: None,
                        error: Some(msg),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Helper para errores de query con mensaje de contexto.
/// Un error reportado por el store para la query es un 400 con el mensaje
/// del store; cualquier otro fallo (pool agotado, conexión caída, fila
/// indecodificable) es inesperado y se reporta como 500.
pub fn store_error(message: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) => AppError::Store {
            message: message.to_string(),
            detail: db_err.to_string(),
        },
        other => AppError::Internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let response = AppError::Validation("Precio inválido".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_status() {
        let response = AppError::Store {
            message: "Error al listar vehículos".to_string(),
            detail: "connection refused".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("Vehículo no encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_status() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unexpected_sqlx_errors_map_to_internal() {
        for err in [sqlx::Error::PoolTimedOut, sqlx::Error::RowNotFound] {
            assert!(matches!(
                store_error("Error al listar vehículos", err),
                AppError::Internal(_)
            ));
        }
    }
}
