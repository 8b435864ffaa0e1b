//! Vehicle Inventory API
//!
//! Servicio CRUD de inventario de vehículos: API HTTP sobre PostgreSQL
//! más una página estática que la consume. Expuesto como librería para
//! que los tests de integración construyan el router real.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
