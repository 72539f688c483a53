//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del dominio de vehículos.

pub mod vehicle;
