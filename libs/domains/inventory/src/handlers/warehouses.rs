use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, IdPath, StaticToken, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    require_token,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StoreError;
use crate::models::{CreateWarehouse, ReportProducts, ReportQuery, Warehouse};
use crate::repository::WarehouseRepository;
use crate::service::WarehouseService;

const TAG: &str = "warehouses";

/// OpenAPI documentation for the warehouses API
#[derive(OpenApi)]
#[openapi(
    paths(list_warehouses, get_warehouse, report_products, create_warehouse),
    components(
        schemas(Warehouse, CreateWarehouse, ReportProducts),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Warehouse management endpoints")
    )
)]
pub struct WarehousesApi;

type SharedService<R> = Arc<WarehouseService<R>>;

fn warehouse_error(err: StoreError) -> AppError {
    err.into_app_error("warehouse")
}

/// Create the warehouse router; creation requires the `TOKEN` header.
pub fn router<R: WarehouseRepository + 'static>(
    service: WarehouseService<R>,
    api_token: impl Into<Arc<str>>,
) -> Router {
    let writes = Router::new()
        .route("/", post(create_warehouse))
        .route_layer(middleware::from_fn_with_state(
            StaticToken::new(api_token),
            require_token,
        ));

    Router::new()
        .route("/", get(list_warehouses))
        .route("/reportProducts", get(report_products))
        .route("/{id}", get(get_warehouse))
        .merge(writes)
        .with_state(Arc::new(service))
}

/// List all warehouses
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All warehouses", body = Vec<Warehouse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_warehouses<R: WarehouseRepository>(
    State(service): State<SharedService<R>>,
) -> Result<Json<Vec<Warehouse>>, AppError> {
    let warehouses = service.get_all().await.map_err(warehouse_error)?;
    Ok(Json(warehouses))
}

/// Get a warehouse by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Warehouse ID")
    ),
    responses(
        (status = 200, description = "Warehouse found", body = Warehouse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_warehouse<R: WarehouseRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<Json<Warehouse>, AppError> {
    let warehouse = service.get_by_id(id).await.map_err(warehouse_error)?;
    Ok(Json(warehouse))
}

/// Count the products held by a warehouse
#[utoipa::path(
    get,
    path = "/reportProducts",
    tag = TAG,
    params(ReportQuery),
    responses(
        (status = 200, description = "Product count", body = ReportProducts),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn report_products<R: WarehouseRepository>(
    State(service): State<SharedService<R>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<ReportProducts>, AppError> {
    let Query(ReportQuery { id }) =
        query.map_err(|e| AppError::InvalidId(format!("invalid id: {}", e.body_text())))?;

    let report = service.report_products(id).await.map_err(warehouse_error)?;
    Ok(Json(report))
}

/// Create a warehouse
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("TOKEN" = String, Header, description = "API token")
    ),
    request_body = CreateWarehouse,
    responses(
        (status = 201, description = "Warehouse created", body = Warehouse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_warehouse<R: WarehouseRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(input): ValidatedJson<CreateWarehouse>,
) -> Result<impl IntoResponse, AppError> {
    let warehouse = service.create(input).await.map_err(warehouse_error)?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}
