use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use crate::utils::response::json_response;

pub mod users;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "user-service",
    };

    json_response(StatusCode::OK, payload)
}
