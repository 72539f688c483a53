//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: validación
//! y filtros de vehículos, acceso serializado al repositorio y carga de
//! datos iniciales.

pub mod vehicle_loader;
pub mod vehicle_service;
pub mod vehicle_validation;

pub use vehicle_service::VehicleService;
