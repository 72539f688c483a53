use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleBatchRequest, DimensionsQuery, UpdateFuelTypeRequest, UpdateMaxSpeedRequest,
    VehicleResponse, WeightQuery,
};
use crate::models::vehicle::VehicleAttributes;
use crate::state::AppState;
use crate::utils::errors::AppResult;

type VehicleList = Json<ApiResponse<Vec<VehicleResponse>>>;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/batch", post(create_vehicles_batch))
        .route("/:id", get(get_vehicle).delete(delete_vehicle))
        .route("/:id/update_speed", put(update_max_speed))
        .route("/:id/update_fuel", put(update_fuel_type))
        .route("/color/:color/year/:year", get(get_by_color_and_year))
        .route("/brand/:brand", get(get_by_brand))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(get_by_brand_and_year_range),
        )
        .route("/average_speed/brand/:brand", get(get_average_speed_by_brand))
        .route("/fuel_type/:fuel_type", get(get_by_fuel_type))
        .route("/transmission/:transmission", get(get_by_transmission_type))
        .route("/dimensions", get(get_by_dimensions))
        .route("/weight", get(get_by_weight))
}

fn controller(state: &AppState) -> VehicleController {
    VehicleController::new(state.vehicles.clone())
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Json<ApiResponse<BTreeMap<i64, VehicleResponse>>> {
    Json(controller(&state).list_all().await)
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleAttributes>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<VehicleResponse>>)> {
    let Json(request) = payload?;
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn create_vehicles_batch(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleBatchRequest>, JsonRejection>,
) -> AppResult<(StatusCode, VehicleList)> {
    let Json(request) = payload?;
    let response = controller(&state).create_batch(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    let Path(id) = id?;
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    controller(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_max_speed(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateMaxSpeedRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let response = controller(&state).update_speed(id, request).await?;
    Ok(Json(response))
}

async fn update_fuel_type(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateFuelTypeRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let response = controller(&state).update_fuel_type(id, request).await?;
    Ok(Json(response))
}

async fn get_by_color_and_year(
    State(state): State<AppState>,
    params: Result<Path<(String, i32)>, PathRejection>,
) -> AppResult<VehicleList> {
    let Path((color, year)) = params?;
    let response = controller(&state).find_by_color_and_year(color, year).await?;
    Ok(Json(response))
}

async fn get_by_brand(
    State(state): State<AppState>,
    brand: Result<Path<String>, PathRejection>,
) -> AppResult<VehicleList> {
    let Path(brand) = brand?;
    Ok(Json(controller(&state).find_by_brand(brand).await))
}

async fn get_by_brand_and_year_range(
    State(state): State<AppState>,
    params: Result<Path<(String, i32, i32)>, PathRejection>,
) -> AppResult<VehicleList> {
    let Path((brand, start_year, end_year)) = params?;
    let response = controller(&state)
        .find_by_brand_and_year_range(brand, start_year, end_year)
        .await?;
    Ok(Json(response))
}

async fn get_average_speed_by_brand(
    State(state): State<AppState>,
    brand: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<f64>>> {
    let Path(brand) = brand?;
    let response = controller(&state).average_speed_by_brand(&brand).await?;
    Ok(Json(response))
}

async fn get_by_fuel_type(
    State(state): State<AppState>,
    fuel_type: Result<Path<String>, PathRejection>,
) -> AppResult<VehicleList> {
    let Path(fuel_type) = fuel_type?;
    Ok(Json(controller(&state).find_by_fuel_type(fuel_type).await))
}

async fn get_by_transmission_type(
    State(state): State<AppState>,
    transmission: Result<Path<String>, PathRejection>,
) -> AppResult<VehicleList> {
    let Path(transmission) = transmission?;
    Ok(Json(controller(&state).find_by_transmission_type(transmission).await))
}

async fn get_by_dimensions(
    State(state): State<AppState>,
    query: Result<Query<DimensionsQuery>, QueryRejection>,
) -> AppResult<VehicleList> {
    let Query(query) = query?;
    Ok(Json(controller(&state).find_by_dimensions(query).await))
}

async fn get_by_weight(
    State(state): State<AppState>,
    query: Result<Query<WeightQuery>, QueryRejection>,
) -> AppResult<VehicleList> {
    let Query(query) = query?;
    Ok(Json(controller(&state).find_by_weight(query).await))
}
