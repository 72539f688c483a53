//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Las variables pueden venir de un fichero `.env` cargado con dotenvy.

use std::env;

use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    /// Fichero JSON opcional con vehículos iniciales
    pub vehicles_file: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl EnvironmentConfig {
    /// Construir la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: Level::INFO,
            vehicles_file: lookup("VEHICLES_FILE").filter(|path| !path.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        };

        config.log_level = match lookup("LOG_LEVEL").and_then(|level| level.parse::<Level>().ok()) {
            Some(level) => level,
            None if config.is_development() => Level::DEBUG,
            None => Level::INFO,
        };
        config
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
