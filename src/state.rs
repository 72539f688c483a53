//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::services::vehicle_service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: VehicleService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, vehicles: VehicleService) -> Self {
        Self { config, vehicles }
    }
}
