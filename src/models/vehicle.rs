//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus atributos.
//! Los nombres JSON son el contrato público de la API (`year`, `passengers`, ...).

use serde::{Deserialize, Serialize};

/// Vehicle principal - registro almacenado en el repositorio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Atributos de un vehículo sin identificador (lo asigna el servicio)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl VehicleAttributes {
    /// Construir el registro final con el id asignado
    pub fn into_vehicle(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            brand: self.brand,
            model: self.model,
            registration: self.registration,
            color: self.color,
            fabrication_year: self.fabrication_year,
            capacity: self.capacity,
            max_speed: self.max_speed,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            weight: self.weight,
            height: self.height,
            length: self.length,
            width: self.width,
        }
    }
}
