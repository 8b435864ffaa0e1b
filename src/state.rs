//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del
//! router de Axum. El servicio es stateless entre requests: todo lo que
//! vive acá es el pool del store y la configuración, nada mutable.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
