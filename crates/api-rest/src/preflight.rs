//! Catch-all OPTIONS handling.
//!
//! Every OPTIONS request, to any path, registered or not, is answered with `200` and a fixed
//! JSON body. The request is still passed to the CORS layer underneath so that browser
//! preflights receive the matching `Access-Control-Allow-*` headers.

use api_shared::MessageRes;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub const PREFLIGHT_MESSAGE: &str = "CORS preflight OK";

pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }

    tracing::debug!(path = %req.uri().path(), "answering OPTIONS request");

    let cors = next.run(req).await;
    let (cors_parts, _) = cors.into_parts();

    let mut response = (StatusCode::OK, Json(MessageRes::new(PREFLIGHT_MESSAGE))).into_response();
    for (name, value) in cors_parts.headers.iter() {
        if name.as_str().starts_with("access-control-") || *name == axum::http::header::VARY {
            response.headers_mut().append(name.clone(), value.clone());
        }
    }
    response
}
