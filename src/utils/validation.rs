//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de campos
//! individuales. Devuelven `validator::ValidationError` con el código
//! de la regla que falló.

use serde::Serialize;
use validator::ValidationError;

/// Código de error para campos de texto vacíos
pub const NOT_EMPTY: &str = "not_empty";

/// Código de error para campos numéricos en cero
pub const NON_ZERO: &str = "non_zero";

/// Validar que un string no esté vacío (sin recortar espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new(NOT_EMPTY);
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor numérico no sea cero
pub fn validate_non_zero<T: PartialEq + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value == T::zero() {
        let mut error = ValidationError::new(NON_ZERO);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
