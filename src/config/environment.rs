//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La URL del store es
//! la única variable obligatoria: sin ella el proceso no arranca.

use anyhow::{anyhow, Result};
use std::env;

/// Puerto por defecto del servidor
const DEFAULT_PORT: u16 = 3000;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno.
    /// Falla (y el proceso termina) si `DATABASE_URL` no está definida.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL ausente en el entorno (.env)"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow!("PORT debe ser un número válido: '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            cors_origins,
        })
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = EnvironmentConfig {
            database_url: "postgres://localhost/inventory".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "static".to_string(),
            cors_origins: vec![],
        };
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
