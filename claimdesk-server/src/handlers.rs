//! HTTP handlers for the access-control routes

use crate::error::{ServerError, ServerResult};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use claimdesk_core::{DashboardStats, MenuItem};
use claimdesk_rbac::{AccessControl, subjects::Subject};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handler state
pub type AppState = Arc<AccessControl>;

fn subject(user_id: Option<String>, role: Option<String>) -> Subject {
    Subject { user_id, role }
}

/// Body of `POST /api/access/menu`
#[derive(Debug, Default, Deserialize)]
pub struct MenuRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Query of `GET /api/access/capability`
#[derive(Debug, Deserialize)]
pub struct CapabilityQuery {
    pub role: Option<String>,
    pub module: String,
    pub capability: String,
}

/// Query of `GET /api/access/label`
#[derive(Debug, Deserialize)]
pub struct LabelQuery {
    pub role: Option<String>,
    pub module: String,
}

/// Query of `GET /api/access/permissions`
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// Body of `POST /api/access/authorize`
#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct AllowedResponse {
    pub allowed: bool,
}

#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub label: String,
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /api/access/menu`
pub async fn menu(
    State(access): State<AppState>,
    Json(request): Json<MenuRequest>,
) -> Json<Vec<MenuItem>> {
    let who = subject(request.user_id, request.role);
    let items = match request.search.as_deref() {
        Some(query) => access.search_menu(&who, request.stats.as_ref(), query),
        None => access.menu(&who, request.stats.as_ref()),
    };
    Json(items)
}

/// `GET /api/access/capability`
pub async fn capability(
    State(access): State<AppState>,
    Query(query): Query<CapabilityQuery>,
) -> Json<AllowedResponse> {
    let who = subject(None, query.role);
    Json(AllowedResponse {
        allowed: access.has_capability(&who, &query.module, &query.capability),
    })
}

/// `GET /api/access/label`
pub async fn label(
    State(access): State<AppState>,
    Query(query): Query<LabelQuery>,
) -> Json<LabelResponse> {
    let who = subject(None, query.role);
    Json(LabelResponse {
        label: access.module_label(&who, &query.module),
    })
}

/// `GET /api/access/permissions`
pub async fn permissions(
    State(access): State<AppState>,
    Query(query): Query<RoleQuery>,
) -> Json<BTreeMap<String, bool>> {
    let who = subject(None, query.role);
    let flags = access
        .permissions(&who)
        .into_iter()
        .map(|(permission, granted)| (permission.as_str().to_string(), granted))
        .collect();
    Json(flags)
}

/// `POST /api/access/authorize`
///
/// 204 when the path is reachable from the role's sidebar, 403 otherwise.
pub async fn authorize(
    State(access): State<AppState>,
    Json(request): Json<AuthorizeRequest>,
) -> ServerResult<StatusCode> {
    if !request.path.trim().starts_with('/') {
        return Err(ServerError::BadRequest(format!(
            "Path must be absolute: '{}'",
            request.path
        )));
    }

    let who = subject(request.user_id, request.role);
    access.authorize_route(&who, &request.path)?;
    Ok(StatusCode::NO_CONTENT)
}
