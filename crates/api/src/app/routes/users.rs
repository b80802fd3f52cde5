//! Account routes. Each handler is the last stage of its pipeline: the
//! extractors in its signature are the gates, run left to right.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post},
};

use accounts_core::UserId;

use crate::app::{AppState, dto, errors};
use crate::context::Admin;
use crate::validation::{ValidatedJson, ValidatedQuery, ValidationRejection};

pub const USER_CREATED: &str = "User Created Succesfully";
pub const USER_DELETED: &str = "User Deleted Succesfully";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/", collection())
}

/// `GET /` and `DELETE /` under the mount prefix.
pub fn collection() -> MethodRouter<AppState> {
    get(list_users).delete(delete_user)
}

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<dto::RegisterRequest>,
) -> Response {
    let result = state
        .users
        .register(
            dto::field(body.email.as_deref()),
            dto::field(body.first_name.as_deref()),
            dto::field(body.last_name.as_deref()),
            dto::field(body.password.as_deref()),
        )
        .await;

    match result {
        Ok(_) => (StatusCode::OK, Json(dto::MessageResponse { message: USER_CREATED })).into_response(),
        Err(e) => errors::service_failure_to_json(e),
    }
}

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<dto::LoginRequest>,
) -> Response {
    match state
        .users
        .login(dto::field(body.email.as_deref()), dto::field(body.password.as_deref()))
        .await
    {
        Ok(token) => (StatusCode::OK, Json(dto::TokenResponse { token })).into_response(),
        Err(e) => errors::service_failure_to_json(e),
    }
}

pub async fn list_users(State(state): State<AppState>, admin: Admin) -> Response {
    match state.users.get_all_users(admin.identity()).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::service_failure_to_text(e),
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    _admin: Admin,
    ValidatedQuery(query): ValidatedQuery<dto::DeleteUserQuery>,
) -> Response {
    let user_id = match dto::field(query.id.as_deref()).parse::<UserId>() {
        Ok(id) => id,
        Err(e) => return ValidationRejection::single("id", e.to_string()).into_response(),
    };

    match state.users.delete_user(&user_id).await {
        Ok(()) => (StatusCode::OK, Json(dto::MessageResponse { message: USER_DELETED })).into_response(),
        Err(e) => errors::service_failure_to_text(e),
    }
}
