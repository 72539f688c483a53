use std::collections::BTreeMap;

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleBatchRequest, DimensionsQuery, UpdateFuelTypeRequest, UpdateMaxSpeedRequest,
    VehicleResponse, WeightQuery,
};
use crate::models::vehicle::{Vehicle, VehicleAttributes};
use crate::services::vehicle_service::VehicleService;
use crate::services::vehicle_validation::VehicleFilter;
use crate::utils::errors::AppError;

const NO_MATCHES: &str = "No se encontraron vehículos con esos criterios";

pub struct VehicleController {
    service: VehicleService,
}

fn to_responses(vehicles: Vec<Vehicle>) -> Vec<VehicleResponse> {
    vehicles.into_iter().map(VehicleResponse::from).collect()
}

impl VehicleController {
    pub fn new(service: VehicleService) -> Self {
        Self { service }
    }

    pub async fn list_all(&self) -> ApiResponse<BTreeMap<i64, VehicleResponse>> {
        let vehicles = self
            .service
            .find_all()
            .await
            .into_iter()
            .map(|(id, vehicle)| (id, VehicleResponse::from(vehicle)))
            .collect();

        ApiResponse::success(vehicles)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.service.find_by_id(id).await?;
        Ok(ApiResponse::success(vehicle.into()))
    }

    pub async fn create(
        &self,
        request: VehicleAttributes,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.service.create_vehicle(request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn create_batch(
        &self,
        request: CreateVehicleBatchRequest,
    ) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        let vehicles = self.service.create_vehicles(request.vehicles).await?;

        Ok(ApiResponse::success_with_message(
            to_responses(vehicles),
            "Vehículos creados exitosamente".to_string(),
        ))
    }

    pub async fn update_speed(
        &self,
        id: i64,
        request: UpdateMaxSpeedRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.service.update_speed(id, request.max_speed).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Velocidad del vehículo actualizada exitosamente".to_string(),
        ))
    }

    pub async fn update_fuel_type(
        &self,
        id: i64,
        request: UpdateFuelTypeRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self.service.update_fuel_type(id, &request.fuel_type).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Tipo de combustible del vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.service.delete_vehicle(id).await?;
        Ok(())
    }

    /// Búsqueda por color y año; sin resultados es un 404
    pub async fn find_by_color_and_year(
        &self,
        color: String,
        year: i32,
    ) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        self.find_non_empty(VehicleFilter::ColorAndYear { color, year }).await
    }

    /// Búsqueda por marca y rango de años; sin resultados es un 404
    pub async fn find_by_brand_and_year_range(
        &self,
        brand: String,
        start_year: i32,
        end_year: i32,
    ) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        self.find_non_empty(VehicleFilter::BrandAndYearRange {
            brand,
            start_year,
            end_year,
        })
        .await
    }

    pub async fn find_by_brand(&self, brand: String) -> ApiResponse<Vec<VehicleResponse>> {
        self.find(VehicleFilter::Brand(brand)).await
    }

    pub async fn find_by_fuel_type(&self, fuel_type: String) -> ApiResponse<Vec<VehicleResponse>> {
        self.find(VehicleFilter::FuelType(fuel_type)).await
    }

    pub async fn find_by_transmission_type(
        &self,
        transmission: String,
    ) -> ApiResponse<Vec<VehicleResponse>> {
        self.find(VehicleFilter::Transmission(transmission)).await
    }

    pub async fn find_by_dimensions(&self, query: DimensionsQuery) -> ApiResponse<Vec<VehicleResponse>> {
        self.find(VehicleFilter::Dimensions {
            min_length: query.min_length,
            max_length: query.max_length,
            min_width: query.min_width,
            max_width: query.max_width,
        })
        .await
    }

    pub async fn find_by_weight(&self, query: WeightQuery) -> ApiResponse<Vec<VehicleResponse>> {
        self.find(VehicleFilter::Weight {
            min: query.min,
            max: query.max,
        })
        .await
    }

    pub async fn average_speed_by_brand(&self, brand: &str) -> Result<ApiResponse<f64>, AppError> {
        let average = self.service.average_speed_by_brand(brand).await?;
        Ok(ApiResponse::success(average))
    }

    async fn find(&self, filter: VehicleFilter) -> ApiResponse<Vec<VehicleResponse>> {
        ApiResponse::success(to_responses(self.service.find_by(&filter).await))
    }

    async fn find_non_empty(
        &self,
        filter: VehicleFilter,
    ) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        let vehicles = self.service.find_by(&filter).await;
        if vehicles.is_empty() {
            return Err(AppError::NotFound(NO_MATCHES.to_string()));
        }
        Ok(ApiResponse::success(to_responses(vehicles)))
    }
}
