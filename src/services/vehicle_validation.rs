//! Validación y predicados de búsqueda de vehículos
//!
//! Funciones puras sobre `Vehicle`: validación de datos al crear/actualizar
//! y los filtros que usa el repositorio durante el recorrido completo.

use validator::ValidationError;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::VehicleError;
use crate::utils::validation::{validate_non_zero, validate_not_empty, NON_ZERO, NOT_EMPTY};

fn check(field: &'static str, result: Result<(), ValidationError>) -> Result<(), VehicleError> {
    result.map_err(|e| VehicleError::InvalidVehicle {
        field,
        code: if e.code == NON_ZERO { NON_ZERO } else { NOT_EMPTY },
    })
}

/// Validar los datos de un vehículo antes de registrarlo.
///
/// Las comprobaciones se ejecutan en orden fijo y se devuelve la primera que
/// falla. `capacity` y `length` no se validan.
pub fn validate_vehicle_data(vehicle: &Vehicle) -> Result<(), VehicleError> {
    check("brand", validate_not_empty(&vehicle.brand))?;
    check("model", validate_not_empty(&vehicle.model))?;
    check("registration", validate_not_empty(&vehicle.registration))?;
    check("year", validate_non_zero(vehicle.fabrication_year))?;
    check("color", validate_not_empty(&vehicle.color))?;
    check("max_speed", validate_non_zero(vehicle.max_speed))?;
    check("fuel_type", validate_not_empty(&vehicle.fuel_type))?;
    check("transmission", validate_not_empty(&vehicle.transmission))?;
    check("height", validate_non_zero(vehicle.height))?;
    check("width", validate_non_zero(vehicle.width))?;
    check("weight", validate_non_zero(vehicle.weight))?;
    Ok(())
}

/// Validar la nueva velocidad máxima de una actualización
pub fn validate_max_speed(speed: f64) -> Result<(), VehicleError> {
    check("max_speed", validate_non_zero(speed))
}

/// Validar el nuevo tipo de combustible de una actualización
pub fn validate_fuel_type(fuel_type: &str) -> Result<(), VehicleError> {
    check("fuel_type", validate_not_empty(fuel_type))
}

/// Filtros de búsqueda sobre la colección de vehículos
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleFilter {
    ColorAndYear {
        color: String,
        year: i32,
    },
    Brand(String),
    FuelType(String),
    Transmission(String),
    /// Rangos inclusivos de largo y ancho
    Dimensions {
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    },
    /// Rango inclusivo de peso
    Weight {
        min: f64,
        max: f64,
    },
    /// Marca exacta y rango inclusivo de años de fabricación
    BrandAndYearRange {
        brand: String,
        start_year: i32,
        end_year: i32,
    },
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehicleFilter::ColorAndYear { color, year } => {
                vehicle.color == *color && vehicle.fabrication_year == *year
            }
            VehicleFilter::Brand(brand) => vehicle.brand == *brand,
            VehicleFilter::FuelType(fuel_type) => vehicle.fuel_type == *fuel_type,
            VehicleFilter::Transmission(transmission) => vehicle.transmission == *transmission,
            VehicleFilter::Dimensions {
                min_length,
                max_length,
                min_width,
                max_width,
            } => {
                (*min_length..=*max_length).contains(&vehicle.length)
                    && (*min_width..=*max_width).contains(&vehicle.width)
            }
            VehicleFilter::Weight { min, max } => (*min..=*max).contains(&vehicle.weight),
            VehicleFilter::BrandAndYearRange {
                brand,
                start_year,
                end_year,
            } => {
                vehicle.brand == *brand
                    && (*start_year..=*end_year).contains(&vehicle.fabrication_year)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_vehicle() -> Vehicle {
        Vehicle {
            id: 1,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            registration: "ABC-123".to_string(),
            color: "red".to_string(),
            fabrication_year: 2018,
            capacity: 5,
            max_speed: 190.0,
            fuel_type: "gasoline".to_string(),
            transmission: "manual".to_string(),
            weight: 1300.0,
            height: 1.4,
            length: 4.6,
            width: 1.8,
        }
    }

    fn failing_field(vehicle: &Vehicle) -> Option<&'static str> {
        match validate_vehicle_data(vehicle) {
            Ok(()) => None,
            Err(VehicleError::InvalidVehicle { field, .. }) => Some(field),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_valid_vehicle_passes() {
        assert!(validate_vehicle_data(&valid_vehicle()).is_ok());
    }

    #[test]
    fn test_each_checked_field_is_reported() {
        let mutations: [(&str, fn(&mut Vehicle)); 11] = [
            ("brand", |v| v.brand.clear()),
            ("model", |v| v.model.clear()),
            ("registration", |v| v.registration.clear()),
            ("year", |v| v.fabrication_year = 0),
            ("color", |v| v.color.clear()),
            ("max_speed", |v| v.max_speed = 0.0),
            ("fuel_type", |v| v.fuel_type.clear()),
            ("transmission", |v| v.transmission.clear()),
            ("height", |v| v.height = 0.0),
            ("width", |v| v.width = 0.0),
            ("weight", |v| v.weight = 0.0),
        ];

        for (field, mutate) in mutations {
            let mut vehicle = valid_vehicle();
            mutate(&mut vehicle);
            assert_eq!(failing_field(&vehicle), Some(field));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let mut vehicle = valid_vehicle();
        vehicle.weight = 0.0;
        vehicle.model.clear();
        vehicle.color.clear();
        assert_eq!(failing_field(&vehicle), Some("model"));
    }

    #[test]
    fn test_capacity_and_length_not_validated() {
        let mut vehicle = valid_vehicle();
        vehicle.capacity = 0;
        vehicle.length = 0.0;
        assert!(validate_vehicle_data(&vehicle).is_ok());
    }

    #[test]
    fn test_error_code_follows_rule() {
        let mut vehicle = valid_vehicle();
        vehicle.height = 0.0;
        assert_eq!(
            validate_vehicle_data(&vehicle),
            Err(VehicleError::InvalidVehicle { field: "height", code: "non_zero" })
        );
    }

    #[test]
    fn test_update_validators() {
        assert!(validate_max_speed(120.0).is_ok());
        assert!(validate_max_speed(0.0).is_err());
        assert!(validate_fuel_type("diesel").is_ok());
        assert!(validate_fuel_type("").is_err());
    }

    #[test]
    fn test_range_filters_are_inclusive() {
        let vehicle = valid_vehicle();

        assert!(VehicleFilter::Weight { min: 1300.0, max: 1400.0 }.matches(&vehicle));
        assert!(VehicleFilter::Weight { min: 1200.0, max: 1300.0 }.matches(&vehicle));
        assert!(!VehicleFilter::Weight { min: 1300.1, max: 1400.0 }.matches(&vehicle));

        assert!(VehicleFilter::Dimensions {
            min_length: 4.6,
            max_length: 4.6,
            min_width: 1.8,
            max_width: 1.8,
        }
        .matches(&vehicle));

        assert!(VehicleFilter::BrandAndYearRange {
            brand: "Toyota".to_string(),
            start_year: 2018,
            end_year: 2018,
        }
        .matches(&vehicle));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let vehicle = valid_vehicle();
        assert!(!VehicleFilter::Weight { min: 2000.0, max: 1000.0 }.matches(&vehicle));
    }

    #[test]
    fn test_equality_filters() {
        let vehicle = valid_vehicle();

        assert!(VehicleFilter::ColorAndYear { color: "red".to_string(), year: 2018 }.matches(&vehicle));
        assert!(!VehicleFilter::ColorAndYear { color: "red".to_string(), year: 2019 }.matches(&vehicle));
        assert!(!VehicleFilter::ColorAndYear { color: "Red".to_string(), year: 2018 }.matches(&vehicle));
        assert!(VehicleFilter::Brand("Toyota".to_string()).matches(&vehicle));
        assert!(VehicleFilter::FuelType("gasoline".to_string()).matches(&vehicle));
        assert!(!VehicleFilter::FuelType("diesel".to_string()).matches(&vehicle));
        assert!(VehicleFilter::Transmission("manual".to_string()).matches(&vehicle));
        assert!(!VehicleFilter::BrandAndYearRange {
            brand: "Honda".to_string(),
            start_year: 2000,
            end_year: 2030,
        }
        .matches(&vehicle));
    }
}
