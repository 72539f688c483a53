//! Servicio de vehículos
//!
//! Punto único de acceso al repositorio. Todas las operaciones toman el
//! mutex una sola vez, de modo que "calcular id e insertar" o "comprobar
//! y borrar" son atómicas frente a peticiones concurrentes.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::vehicle::{Vehicle, VehicleAttributes};
use crate::repositories::vehicle_repository::{VehicleMap, VehicleRepository};
use crate::services::vehicle_validation::{
    validate_fuel_type, validate_max_speed, validate_vehicle_data, VehicleFilter,
};
use crate::utils::errors::VehicleError;

type SharedRepository = Arc<Mutex<Box<dyn VehicleRepository + Send>>>;

#[derive(Clone)]
pub struct VehicleService {
    repository: SharedRepository,
}

impl Default for VehicleService {
    fn default() -> Self {
        Self::new(VehicleMap::new())
    }
}

impl VehicleService {
    pub fn new<R>(repository: R) -> Self
    where
        R: VehicleRepository + Send + 'static,
    {
        let repository: Box<dyn VehicleRepository + Send> = Box::new(repository);
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    pub async fn find_all(&self) -> BTreeMap<i64, Vehicle> {
        self.repository.lock().await.find_all()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Vehicle, VehicleError> {
        self.repository.lock().await.find_by_id(id)
    }

    /// Mayor id presente actualmente en la colección
    pub async fn last_id(&self) -> i64 {
        self.repository.lock().await.last_id()
    }

    /// Validar y registrar un vehículo nuevo con el siguiente id libre
    pub async fn create_vehicle(&self, attributes: VehicleAttributes) -> Result<Vehicle, VehicleError> {
        let mut repository = self.repository.lock().await;

        let vehicle = attributes.into_vehicle(repository.next_id()?);
        validate_vehicle_data(&vehicle)?;
        repository.create(vehicle.clone())?;

        info!("✅ Vehículo {} creado ({} {})", vehicle.id, vehicle.brand, vehicle.model);
        Ok(vehicle)
    }

    /// Registrar varios vehículos con ids consecutivos en el orden recibido.
    /// Si alguno no es válido no se inserta ninguno.
    pub async fn create_vehicles(
        &self,
        batch: Vec<VehicleAttributes>,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        let mut repository = self.repository.lock().await;

        let first_id = repository.next_id()?;
        let vehicles = batch
            .into_iter()
            .enumerate()
            .map(|(offset, attributes)| {
                i64::try_from(offset)
                    .ok()
                    .and_then(|offset| first_id.checked_add(offset))
                    .map(|id| attributes.into_vehicle(id))
                    .ok_or(VehicleError::IdsExhausted(i64::MAX))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for vehicle in &vehicles {
            validate_vehicle_data(vehicle)?;
        }
        repository.create_batch(vehicles.clone())?;

        info!("✅ {} vehículos creados a partir del id {}", vehicles.len(), first_id);
        Ok(vehicles)
    }

    /// Insertar registros que ya traen id (datos iniciales)
    pub async fn import_vehicles(&self, vehicles: Vec<Vehicle>) -> Result<usize, VehicleError> {
        for vehicle in &vehicles {
            validate_vehicle_data(vehicle)?;
        }

        let count = vehicles.len();
        self.repository.lock().await.create_batch(vehicles)?;
        Ok(count)
    }

    pub async fn update_speed(&self, id: i64, speed: f64) -> Result<Vehicle, VehicleError> {
        validate_max_speed(speed)?;

        let mut repository = self.repository.lock().await;
        repository.update_speed(id, speed)?;

        debug!("🔄 Velocidad del vehículo {} actualizada a {}", id, speed);
        repository.find_by_id(id)
    }

    pub async fn update_fuel_type(&self, id: i64, fuel_type: &str) -> Result<Vehicle, VehicleError> {
        validate_fuel_type(fuel_type)?;

        let mut repository = self.repository.lock().await;
        repository.update_fuel_type(id, fuel_type)?;

        debug!("🔄 Combustible del vehículo {} actualizado a {}", id, fuel_type);
        repository.find_by_id(id)
    }

    /// Borrar un vehículo existente; NotFound si no existe
    pub async fn delete_vehicle(&self, id: i64) -> Result<(), VehicleError> {
        let mut repository = self.repository.lock().await;

        repository.find_by_id(id)?;
        repository.delete(id);

        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }

    pub async fn find_by(&self, filter: &VehicleFilter) -> Vec<Vehicle> {
        self.repository.lock().await.find_by(filter)
    }

    pub async fn average_speed_by_brand(&self, brand: &str) -> Result<f64, VehicleError> {
        self.repository.lock().await.average_speed_by_brand(brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(brand: &str, speed: f64) -> VehicleAttributes {
        VehicleAttributes {
            brand: brand.to_string(),
            model: "Model".to_string(),
            registration: "REG".to_string(),
            color: "white".to_string(),
            fabrication_year: 2021,
            capacity: 2,
            max_speed: speed,
            fuel_type: "diesel".to_string(),
            transmission: "manual".to_string(),
            weight: 900.0,
            height: 1.3,
            length: 3.9,
            width: 1.6,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let service = VehicleService::default();

        let first = service.create_vehicle(attributes("Ford", 100.0)).await.unwrap();
        let second = service.create_vehicle(attributes("Fiat", 100.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.find_by_id(2).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_create_invalid_vehicle_is_not_stored() {
        let service = VehicleService::default();
        let mut invalid = attributes("Ford", 100.0);
        invalid.registration.clear();

        let result = service.create_vehicle(invalid).await;
        assert_eq!(
            result,
            Err(VehicleError::InvalidVehicle { field: "registration", code: "not_empty" })
        );
        assert!(service.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_assigns_consecutive_ids_in_order() {
        let service = VehicleService::default();
        service.create_vehicle(attributes("Seed", 100.0)).await.unwrap();

        let created = service
            .create_vehicles(vec![
                attributes("A", 100.0),
                attributes("B", 100.0),
                attributes("C", 100.0),
            ])
            .await
            .unwrap();

        let pairs: Vec<(i64, &str)> = created.iter().map(|v| (v.id, v.brand.as_str())).collect();
        assert_eq!(pairs, vec![(2, "A"), (3, "B"), (4, "C")]);
        assert_eq!(service.last_id().await, 4);
    }

    #[tokio::test]
    async fn test_batch_with_invalid_vehicle_inserts_nothing() {
        let service = VehicleService::default();
        let mut invalid = attributes("B", 100.0);
        invalid.width = 0.0;

        let result = service
            .create_vehicles(vec![attributes("A", 100.0), invalid])
            .await;

        assert!(matches!(result, Err(VehicleError::InvalidVehicle { field: "width", .. })));
        assert!(service.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let service = VehicleService::default();
        service.create_vehicle(attributes("A", 100.0)).await.unwrap();
        service.create_vehicle(attributes("B", 100.0)).await.unwrap();
        service.delete_vehicle(2).await.unwrap();

        let next = service.create_vehicle(attributes("C", 100.0)).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = VehicleService::default();
        assert_eq!(service.delete_vehicle(5).await, Err(VehicleError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_updates() {
        let service = VehicleService::default();
        service.create_vehicle(attributes("A", 100.0)).await.unwrap();

        let updated = service.update_speed(1, 220.0).await.unwrap();
        assert_eq!(updated.max_speed, 220.0);

        let updated = service.update_fuel_type(1, "electric").await.unwrap();
        assert_eq!(updated.fuel_type, "electric");

        assert_eq!(service.update_speed(9, 100.0).await, Err(VehicleError::NotFound(9)));
        assert_eq!(
            service.update_fuel_type(9, "gas").await,
            Err(VehicleError::NotFound(9))
        );
        assert!(matches!(
            service.update_speed(1, 0.0).await,
            Err(VehicleError::InvalidVehicle { field: "max_speed", .. })
        ));
        assert!(matches!(
            service.update_fuel_type(1, "").await,
            Err(VehicleError::InvalidVehicle { field: "fuel_type", .. })
        ));
    }

    #[tokio::test]
    async fn test_import_keeps_ids_and_advances_sequence() {
        let service = VehicleService::default();
        let imported = vec![
            attributes("A", 100.0).into_vehicle(10),
            attributes("B", 100.0).into_vehicle(20),
        ];

        assert_eq!(service.import_vehicles(imported).await, Ok(2));

        let next = service.create_vehicle(attributes("C", 100.0)).await.unwrap();
        assert_eq!(next.id, 21);
    }

    #[tokio::test]
    async fn test_create_after_max_id_fails_without_inserting() {
        let service = VehicleService::default();
        service
            .import_vehicles(vec![attributes("A", 100.0).into_vehicle(i64::MAX)])
            .await
            .unwrap();

        assert_eq!(
            service.create_vehicle(attributes("B", 100.0)).await,
            Err(VehicleError::IdsExhausted(i64::MAX))
        );
        assert_eq!(
            service.create_vehicles(vec![attributes("C", 100.0)]).await,
            Err(VehicleError::IdsExhausted(i64::MAX))
        );
        assert_eq!(service.find_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_batch_crossing_max_id_inserts_nothing() {
        let service = VehicleService::default();
        service
            .import_vehicles(vec![attributes("A", 100.0).into_vehicle(i64::MAX - 1)])
            .await
            .unwrap();

        let result = service
            .create_vehicles(vec![attributes("B", 100.0), attributes("C", 100.0)])
            .await;

        assert_eq!(result, Err(VehicleError::IdsExhausted(i64::MAX)));
        assert_eq!(service.find_all().await.len(), 1);

        let last = service.create_vehicle(attributes("D", 100.0)).await.unwrap();
        assert_eq!(last.id, i64::MAX);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let service = VehicleService::default();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_vehicle(attributes(&format!("Brand{}", i), 100.0))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }
}
