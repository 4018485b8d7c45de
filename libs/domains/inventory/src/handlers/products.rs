use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AppError, IdPath, StaticToken, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    require_token,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StoreError;
use crate::models::{CreateProduct, Product, ProductFull, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        get_full_data,
        create_product,
        replace_product,
        patch_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductFull, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ProductsApi;

type SharedService<R> = Arc<ProductService<R>>;

fn product_error(err: StoreError) -> AppError {
    err.into_app_error("product")
}

/// Create the product router; write routes require the `TOKEN` header.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    api_token: impl Into<Arc<str>>,
) -> Router {
    let reads = Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
        .route("/details/{id}", get(get_full_data));

    let writes = Router::new()
        .route("/", post(create_product))
        .route(
            "/{id}",
            put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            StaticToken::new(api_token),
            require_token,
        ));

    reads.merge(writes).with_state(Arc::new(service))
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service.get_all().await.map_err(product_error)?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<Json<Product>, AppError> {
    let product = service.get_by_id(id).await.map_err(product_error)?;
    Ok(Json(product))
}

/// Get a product with the name and address of its warehouse
#[utoipa::path(
    get,
    path = "/details/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with warehouse data", body = ProductFull),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_full_data<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<Json<ProductFull>, AppError> {
    let full = service.get_full_data(id).await.map_err(product_error)?;
    Ok(Json(full))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("TOKEN" = String, Header, description = "API token")
    ),
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = service.create(input).await.map_err(product_error)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product with a complete body
///
/// Publication state and warehouse keep their stored values; zero quantity
/// or price keep the stored value as well.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("TOKEN" = String, Header, description = "API token")
    ),
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = service
        .update_product(id, input.into())
        .await
        .map_err(product_error)?;
    Ok(Json(product))
}

/// Update the supplied fields of a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("TOKEN" = String, Header, description = "API token")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = service
        .update_product(id, input)
        .await
        .map_err(product_error)?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("TOKEN" = String, Header, description = "API token")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    service.delete(id).await.map_err(product_error)?;
    Ok(StatusCode::NO_CONTENT)
}
