//! Social-login token-exchange routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use linkflow_auth::ProviderKind;
use linkflow_core::Error;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/{provider}", post(login))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    code: Option<String>,
    redirect_uri: Option<String>,
    state: Option<String>,
}

/// POST /api/auth/{provider} — exchange an authorization code for a session.
async fn login(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    Json(body): Json<LoginRequest>,
) -> impl IntoResponse {
    let Some(kind) = ProviderKind::parse(&provider) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("unknown provider: {provider}") })),
        );
    };

    let (Some(code), Some(redirect_uri)) = (body.code, body.redirect_uri) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "code and redirectUri are required" })),
        );
    };

    let outcome = match state
        .provider(kind)
        .authenticate(&code, &redirect_uri, body.state.as_deref())
        .await
    {
        Ok(outcome) => outcome,
        Err(Error::Auth(msg)) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": msg })),
            );
        }
        Err(e) => {
            error!(provider = kind.namespace(), error = %e, "login failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let is_new = state.identities.record(&outcome.uid);
    info!(provider = kind.namespace(), uid = %outcome.uid, is_new, "login succeeded");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "customToken": outcome.session_token,
            "user": outcome.profile,
            "uid": outcome.uid,
            "isNewUser": is_new,
        })),
    )
}
