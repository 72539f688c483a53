//! DTOs de entrada y salida de la API

pub mod api_response;
pub mod vehicle_dto;
