//! Repositorio de vehículos en memoria
//!
//! `VehicleRepository` es la interfaz del almacén; `VehicleMap` la
//! implementación sobre un `BTreeMap` propiedad de la instancia.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::vehicle::Vehicle;
use crate::services::vehicle_validation::VehicleFilter;
use crate::utils::errors::VehicleError;

/// Operaciones del almacén de vehículos
pub trait VehicleRepository {
    /// Copia completa de la colección
    fn find_all(&self) -> BTreeMap<i64, Vehicle>;

    fn find_by_id(&self, id: i64) -> Result<Vehicle, VehicleError>;

    /// Mayor id presente en la colección, 0 si está vacía
    fn last_id(&self) -> i64;

    /// Id que debe usar la próxima inserción; nunca reutiliza un id ya asignado.
    /// Falla con `IdsExhausted` si ya se asignó `i64::MAX`.
    fn next_id(&self) -> Result<i64, VehicleError>;

    fn create(&mut self, vehicle: Vehicle) -> Result<(), VehicleError>;

    /// Inserta todos o ninguno
    fn create_batch(&mut self, vehicles: Vec<Vehicle>) -> Result<(), VehicleError>;

    fn update_speed(&mut self, id: i64, speed: f64) -> Result<(), VehicleError>;

    fn update_fuel_type(&mut self, id: i64, fuel_type: &str) -> Result<(), VehicleError>;

    /// Devuelve si existía; borrar un id ausente no es un error
    fn delete(&mut self, id: i64) -> bool;

    /// Recorrido completo aplicando el filtro
    fn find_by(&self, filter: &VehicleFilter) -> Vec<Vehicle>;

    fn average_speed_by_brand(&self, brand: &str) -> Result<f64, VehicleError>;

    fn find_by_color_and_year(&self, color: &str, year: i32) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::ColorAndYear {
            color: color.to_string(),
            year,
        })
    }

    fn find_by_brand(&self, brand: &str) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::Brand(brand.to_string()))
    }

    fn find_by_fuel_type(&self, fuel_type: &str) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::FuelType(fuel_type.to_string()))
    }

    fn find_by_transmission_type(&self, transmission: &str) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::Transmission(transmission.to_string()))
    }

    fn find_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::Dimensions {
            min_length,
            max_length,
            min_width,
            max_width,
        })
    }

    fn find_by_weight(&self, min: f64, max: f64) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::Weight { min, max })
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Vec<Vehicle> {
        self.find_by(&VehicleFilter::BrandAndYearRange {
            brand: brand.to_string(),
            start_year,
            end_year,
        })
    }
}

/// Almacén en memoria con contador monotónico de ids
#[derive(Debug, Default)]
pub struct VehicleMap {
    db: BTreeMap<i64, Vehicle>,
    sequence: i64,
}

impl VehicleMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Vehicle, VehicleError> {
        self.db.get_mut(&id).ok_or(VehicleError::NotFound(id))
    }
}

impl VehicleRepository for VehicleMap {
    fn find_all(&self) -> BTreeMap<i64, Vehicle> {
        self.db.clone()
    }

    fn find_by_id(&self, id: i64) -> Result<Vehicle, VehicleError> {
        self.db.get(&id).cloned().ok_or(VehicleError::NotFound(id))
    }

    fn last_id(&self) -> i64 {
        self.db.keys().next_back().copied().unwrap_or(0)
    }

    fn next_id(&self) -> Result<i64, VehicleError> {
        let current = self.sequence.max(self.last_id());
        current
            .checked_add(1)
            .ok_or(VehicleError::IdsExhausted(current))
    }

    fn create(&mut self, vehicle: Vehicle) -> Result<(), VehicleError> {
        if self.db.contains_key(&vehicle.id) {
            return Err(VehicleError::AlreadyExists(vehicle.id));
        }

        self.sequence = self.sequence.max(vehicle.id);
        debug!("🚗 Vehículo {} insertado", vehicle.id);
        self.db.insert(vehicle.id, vehicle);
        Ok(())
    }

    fn create_batch(&mut self, vehicles: Vec<Vehicle>) -> Result<(), VehicleError> {
        let mut seen = std::collections::BTreeSet::new();
        for vehicle in &vehicles {
            if self.db.contains_key(&vehicle.id) || !seen.insert(vehicle.id) {
                return Err(VehicleError::AlreadyExists(vehicle.id));
            }
        }

        for vehicle in vehicles {
            self.create(vehicle)?;
        }
        Ok(())
    }

    fn update_speed(&mut self, id: i64, speed: f64) -> Result<(), VehicleError> {
        self.get_mut(id)?.max_speed = speed;
        Ok(())
    }

    fn update_fuel_type(&mut self, id: i64, fuel_type: &str) -> Result<(), VehicleError> {
        self.get_mut(id)?.fuel_type = fuel_type.to_string();
        Ok(())
    }

    fn delete(&mut self, id: i64) -> bool {
        self.db.remove(&id).is_some()
    }

    fn find_by(&self, filter: &VehicleFilter) -> Vec<Vehicle> {
        self.db
            .values()
            .filter(|vehicle| filter.matches(vehicle))
            .cloned()
            .collect()
    }

    fn average_speed_by_brand(&self, brand: &str) -> Result<f64, VehicleError> {
        let (sum, count) = self
            .db
            .values()
            .filter(|vehicle| vehicle.brand == brand)
            .fold((0.0_f64, 0_u32), |(sum, count), vehicle| {
                (sum + vehicle.max_speed, count + 1)
            });

        if count == 0 {
            return Err(VehicleError::NoVehiclesWithBrand(brand.to_string()));
        }

        Ok(sum / f64::from(count))
    }
}
