//! End-to-end tests for the HTTP sidecar and the API client
//!
//! The sidecar router is driven in-process with `tower::ServiceExt::oneshot`;
//! the back-office API is mocked with wiremock.

use anyhow::Result;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use claimdesk::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{header as match_header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Send one request; JSON responses are decoded, plain-text rejections are
/// returned as a JSON string.
async fn call(router: axum::Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = router.oneshot(request).await?;
    let status = response.status();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    let body = if bytes.is_empty() {
        Value::Null
    } else if is_json {
        serde_json::from_slice(&bytes)?
    } else {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    };
    Ok((status, body))
}

fn authorize(role: Option<&str>, target: &str) -> Result<Request<Body>> {
    let body = json!({ "role": role, "path": target });
    Ok(Request::builder()
        .method("POST")
        .uri("/api/access/authorize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

#[tokio::test]
async fn test_sidecar_from_config_file() -> Result<()> {
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(
        file.path(),
        r#"{
            "audit_enabled": false,
            "missing_role": "deny",
            "role_aliases": { "operasyon": "ikincil-admin" },
            "server": { "bind_address": "127.0.0.1", "port": 8099 }
        }"#,
    )?;

    let config = ServerConfig::from_file(file.path())?;
    let server = AccessServer::builder().with_config(config).build()?;
    assert_eq!(server.address(), "127.0.0.1:8099");

    let router = server.router();

    let (status, _) = call(router.clone(), authorize(Some("operasyon"), "/documents/result")?).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(router.clone(), authorize(None, "/dashboard")?).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    let (status, body) = call(
        router,
        Request::builder()
            .uri("/api/access/permissions?role=operasyon")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canEditCustomer"], true);
    assert_eq!(body["canCloseFile"], false);

    Ok(())
}

#[tokio::test]
async fn test_sidecar_rejects_malformed_bodies() -> Result<()> {
    let router = AccessServer::builder().build()?.router();

    let request = Request::builder()
        .method("POST")
        .uri("/api/access/menu")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let (status, body) = call(router.clone(), request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_string());

    let (status, _) = call(
        router,
        Request::builder()
            .uri("/api/access/nope")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_page_context_over_http() -> Result<()> {
    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "session-1",
            "user": {"id": "b-3", "name": "Bayi Üç", "role": "bayi"}
        })))
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(match_header("authorization", "Bearer session-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b-3", "role": "bayi"
        })))
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "active_customers": 8,
            "pending_payments": "2",
            "unread_notifications": 0
        })))
        .mount(&api)
        .await;

    let client = ApiClient::new(&api.uri())?;
    client.login("bayi3", "secret").await?;

    let rbac = AccessControl::builder().with_audit_logging(false).build()?;
    let page = PageContext::load(&client, &rbac).await?;

    let labels: Vec<&str> = page.menu.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["Ana Sayfa", "Müşterilerim", "Ödemelerim", "Bildirimler"]);
    assert_eq!(page.menu[1].badge.as_deref(), Some("8"));
    assert_eq!(page.menu[2].badge.as_deref(), Some("2"));
    assert_eq!(page.menu[3].badge, None);

    assert!(page.can(Permission::ViewDealerInfo));
    assert!(!page.can(Permission::ViewDealerCode));
    assert!(rbac.authorize_route(&page.subject, "/accounting/my-payments").is_ok());
    assert!(rbac.authorize_route(&page.subject, "/accounting/reports").is_err());

    Ok(())
}

#[tokio::test]
async fn test_page_context_requires_session() -> Result<()> {
    let client = ApiClient::new("http://127.0.0.1:9/")?;
    let rbac = AccessControl::default();

    let result = PageContext::load(&client, &rbac).await;
    assert!(matches!(result, Err(ClientError::NotAuthenticated)));
    Ok(())
}
