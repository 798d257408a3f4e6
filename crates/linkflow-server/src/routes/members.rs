//! Roster, graph, and category routes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use linkflow_core::privacy::{anonymize_name, statistical_company_display, NameDisplay};
use linkflow_core::Member;
use linkflow_graph::{build_graph, category_catalog};
use linkflow_ingest::parse_roster;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(replace_members))
        .route("/members/init", post(reseed_members))
        .route("/members/ingest", post(ingest_members))
        .route("/graph", get(get_graph))
        .route("/categories", get(get_categories))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    masked: bool,
}

/// GET /api/members — the roster, optionally privacy-masked.
async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Member>> {
    let mut members = state.roster.list();

    if query.masked {
        mask_members(&mut members);
    }

    Json(members)
}

/// De-identify a roster for public viewing: partial names, contact fields
/// cleared, companies reduced to their statistical display ("OO전자 소속
/// 가입자 2명"), counted over the roster being returned.
fn mask_members(members: &mut [Member]) {
    let mut company_counts: HashMap<String, usize> = HashMap::new();
    for member in members.iter() {
        let company = member.company.trim();
        if !company.is_empty() {
            *company_counts.entry(company.to_string()).or_insert(0) += 1;
        }
    }

    for member in members.iter_mut() {
        member.name = anonymize_name(&member.name, NameDisplay::Partial);
        member.phone.clear();
        member.email.clear();

        let company = member.company.trim().to_string();
        if !company.is_empty() {
            let count = company_counts.get(&company).copied().unwrap_or(1);
            member.company = statistical_company_display(&company, count);
        }
    }
}

/// POST /api/members — overwrite the whole collection.
async fn replace_members(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    if !body.is_array() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "expected a member array" })),
        );
    }

    let members: Vec<Member> = match serde_json::from_value(body) {
        Ok(members) => members,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("invalid member record: {e}") })),
            );
        }
    };

    match state.roster.replace_all(members) {
        Ok(count) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "count": count })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// POST /api/members/init — reset to the bundled default dataset.
async fn reseed_members(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.roster.reseed() {
        Ok(count) => {
            info!(count, "roster reseeded");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "success": true, "count": count })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// POST /api/members/ingest — parse a pasted delimited-text export and
/// replace the roster with it.
async fn ingest_members(State(state): State<Arc<AppState>>, blob: String) -> impl IntoResponse {
    let report = parse_roster(&blob);

    if report.members.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "no usable rows",
                "dropped": report.dropped,
            })),
        );
    }

    let dropped = report.dropped;
    match state.roster.replace_all(report.members) {
        Ok(count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "count": count,
                "dropped": dropped,
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// GET /api/graph — the force-graph payload for the current roster.
async fn get_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let members = state.roster.list();
    Json(build_graph(&members))
}

/// GET /api/categories — distinct category filter values.
async fn get_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let members = state.roster.list();
    Json(category_catalog(&members))
}
