//! Carga de vehículos iniciales
//!
//! Lee un fichero JSON con un array de vehículos (con id) para poblar
//! el repositorio antes de arrancar el servidor.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::vehicle::Vehicle;
use crate::services::vehicle_service::VehicleService;

/// Leer vehículos desde un fichero JSON
pub fn load_vehicles_from_file(path: impl AsRef<Path>) -> Result<Vec<Vehicle>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("No se pudo leer el fichero {}", path.display()))?;
    let vehicles: Vec<Vehicle> = serde_json::from_str(&content)
        .with_context(|| format!("JSON de vehículos inválido en {}", path.display()))?;
    Ok(vehicles)
}

/// Cargar el fichero e insertar los vehículos en el servicio
pub async fn seed_from_file(service: &VehicleService, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let vehicles = load_vehicles_from_file(path)?;
    let count = service
        .import_vehicles(vehicles)
        .await
        .with_context(|| format!("Vehículos inválidos en {}", path.display()))?;

    info!("📦 {} vehículos cargados desde {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": 1, "brand": "Chevrolet", "model": "Aveo", "registration": "AAA-111", "color": "gray",
         "year": 2012, "passengers": 5, "max_speed": 170.0, "fuel_type": "gasoline",
         "transmission": "manual", "weight": 1100.0, "height": 1.5, "length": 4.3, "width": 1.7},
        {"id": 4, "brand": "Nissan", "model": "Leaf", "registration": "BBB-222", "color": "white",
         "year": 2020, "passengers": 5, "max_speed": 150.0, "fuel_type": "electric",
         "transmission": "automatic", "weight": 1600.0, "height": 1.5, "length": 4.5, "width": 1.8}
    ]"#;

    #[test]
    fn test_load_vehicles_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let vehicles = load_vehicles_from_file(file.path()).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[1].id, 4);
        assert_eq!(vehicles[1].fabrication_year, 2020);
        assert_eq!(vehicles[1].capacity, 5);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_vehicles_from_file("/definitely/not/here.json").is_err());
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();
        let service = VehicleService::default();

        let count = seed_from_file(&service, file.path()).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(service.last_id().await, 4);
        assert_eq!(service.find_by_id(1).await.unwrap().brand, "Chevrolet");
    }

    #[tokio::test]
    async fn test_seed_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let service = VehicleService::default();

        assert!(seed_from_file(&service, file.path()).await.is_err());
        assert!(service.find_all().await.is_empty());
    }
}
