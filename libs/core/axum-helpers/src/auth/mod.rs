//! Static shared-secret check for write routes.
//!
//! Callers send the secret in the `TOKEN` header; it is compared with the
//! value configured at startup.
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use axum_helpers::auth::{StaticToken, require_token};
//!
//! let writes = Router::new()
//!     .route("/products", post(create_product))
//!     .route_layer(middleware::from_fn_with_state(
//!         StaticToken::new(config.api_token.clone()),
//!         require_token,
//!     ));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header carrying the shared secret (header names are case-insensitive)
pub const TOKEN_HEADER: &str = "token";

/// Expected token value, cheap to clone into middleware state.
#[derive(Clone)]
pub struct StaticToken(Arc<str>);

impl StaticToken {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    fn matches(&self, provided: &[u8]) -> bool {
        self.0.as_bytes().ct_eq(provided).into()
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

/// Reject the request with 401 unless the `TOKEN` header matches.
///
/// - header missing or empty: `"token not found"`
/// - header present but different: `"invalid token"`
pub async fn require_token(
    State(expected): State<StaticToken>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(TOKEN_HEADER)
        .map(|value| value.as_bytes())
        .filter(|value| !value.is_empty());

    let Some(provided) = provided else {
        tracing::debug!("Request without TOKEN header");
        return Err(AppError::Unauthorized("token not found".to_string()));
    };

    if !expected.matches(provided) {
        tracing::debug!("Request with mismatching TOKEN header");
        return Err(AppError::Unauthorized("invalid token".to_string()));
    }

    Ok(next.run(request).await)
}
