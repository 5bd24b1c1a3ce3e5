use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::facade::UserFacade;
use crate::models::user::{CreateUserInput, UpdateUserInput};
use crate::utils::error::AppError;
use crate::utils::messages::Messages;
use crate::utils::response::{error_response, json_response};

/// Shared handler state: the facade the handlers call into and the fixed
/// message table, injected once at construction.
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<dyn UserFacade>,
    pub messages: Arc<Messages>,
}

impl AppState {
    pub fn new(facade: Arc<dyn UserFacade>) -> Self {
        Self {
            facade,
            messages: Arc::new(Messages::default()),
        }
    }
}

/// Path identifiers must be non-negative integers; anything else is rejected
/// before the facade is involved.
fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::Validation(format!("invalid user id '{raw}'")))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected create payload");
            return error_response(StatusCode::BAD_REQUEST, state.messages.invalid_json);
        }
    };

    match state.facade.create_user(input).await {
        Ok(created) => json_response(StatusCode::CREATED, created),
        Err(err) => {
            tracing::error!(error = ?err, "failed to create user");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, state.messages.create_failed)
        }
    }
}

pub async fn get_all_users(State(state): State<AppState>) -> Response {
    match state.facade.get_all_users().await {
        Ok(users) => json_response(StatusCode::OK, users),
        Err(err) => {
            tracing::error!(error = ?err, "failed to fetch users");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, state.messages.list_failed)
        }
    }
}

pub async fn get_single_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_user_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!(error = %err, "rejected user id");
            return error_response(StatusCode::BAD_REQUEST, state.messages.invalid_id);
        }
    };

    // Any facade failure, a missing user included, maps to 404 here.
    match state.facade.get_user_by_id(id).await {
        Ok(user) => json_response(StatusCode::OK, user),
        Err(err) => {
            tracing::error!(error = ?err, id, "failed to fetch user");
            error_response(StatusCode::NOT_FOUND, state.messages.not_found)
        }
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateUserInput>, JsonRejection>,
) -> Response {
    let id = match parse_user_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!(error = %err, "rejected user id");
            return error_response(StatusCode::BAD_REQUEST, state.messages.invalid_id);
        }
    };

    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected update payload");
            return error_response(StatusCode::BAD_REQUEST, state.messages.invalid_json);
        }
    };

    match state.facade.update_user(id, input).await {
        Ok(updated) => json_response(StatusCode::OK, updated),
        Err(err) => {
            tracing::error!(error = ?err, id, "failed to update user");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, state.messages.update_failed)
        }
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_user_id(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!(error = %err, "rejected user id");
            return error_response(StatusCode::BAD_REQUEST, state.messages.invalid_id);
        }
    };

    match state.facade.delete_user(id).await {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(err) => {
            tracing::error!(error = ?err, id, "failed to delete user");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, state.messages.delete_failed)
        }
    }
}
