use serde::{Deserialize, Serialize};

use crate::models::vehicle::{Vehicle, VehicleAttributes};

// Request para crear varios vehículos
#[derive(Debug, Deserialize)]
pub struct CreateVehicleBatchRequest {
    pub vehicles: Vec<VehicleAttributes>,
}

// Request para actualizar la velocidad máxima
#[derive(Debug, Deserialize)]
pub struct UpdateMaxSpeedRequest {
    pub max_speed: f64,
}

// Request para actualizar el tipo de combustible
#[derive(Debug, Deserialize)]
pub struct UpdateFuelTypeRequest {
    pub fuel_type: String,
}

// Query de búsqueda por dimensiones
#[derive(Debug, Deserialize)]
pub struct DimensionsQuery {
    pub min_length: f64,
    pub max_length: f64,
    pub min_width: f64,
    pub max_width: f64,
}

// Query de búsqueda por peso
#[derive(Debug, Deserialize)]
pub struct WeightQuery {
    pub min: f64,
    pub max: f64,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub year: i32,
    pub passengers: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            registration: vehicle.registration,
            color: vehicle.color,
            year: vehicle.fabrication_year,
            passengers: vehicle.capacity,
            max_speed: vehicle.max_speed,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            weight: vehicle.weight,
            height: vehicle.height,
            length: vehicle.length,
            width: vehicle.width,
        }
    }
}
