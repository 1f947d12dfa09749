//! # ClaimDesk Client
//!
//! Typed async client for the back-office API calls the access-control layer
//! depends on: login, logout, the current user, and dashboard statistics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use claimdesk_client::{ApiClient, ClientResult};
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let client = ApiClient::new("https://backoffice.example.com/api")?;
//!     let login = client.login("operator@example.com", "secret").await?;
//!     println!("Logged in as {:?}", login.user.role);
//!
//!     let stats = client.dashboard_stats().await?;
//!     println!("Active customers: {:?}", stats.active_customers);
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```

mod error;
pub mod page;

pub use error::{ClientError, ClientResult};
pub use page::PageContext;

use async_trait::async_trait;
use claimdesk_core::{CurrentUser, DashboardStats};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for later calls
    pub token: String,
    /// The authenticated user
    pub user: CurrentUser,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The API surface needed to build a page for the current user.
#[async_trait]
pub trait BackOffice: Send + Sync {
    /// `GET /auth/me`
    async fn current_user(&self) -> ClientResult<CurrentUser>;

    /// `GET /dashboard/stats`
    async fn dashboard_stats(&self) -> ClientResult<DashboardStats>;
}

/// HTTP client for the back-office API.
///
/// Cloning is cheap; clones share the connection pool and the session token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Url`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Use an existing session token.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
            ..self
        }
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// `POST /auth/login`; stores the returned token.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = self
            .http
            .post(self.endpoint("auth/login")?)
            .json(&LoginRequest { username, password });
        let response: LoginResponse = self.execute(request).await?;

        *self.token.write().await = Some(response.token.clone());
        debug!(user = %response.user.id, "Logged in");
        Ok(response)
    }

    /// `POST /auth/logout`.
    ///
    /// The local token is dropped even when the call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let Some(token) = self.token.write().await.take() else {
            return Ok(());
        };

        let request = self
            .http
            .post(self.endpoint("auth/logout")?)
            .bearer_auth(token);
        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> ClientResult<CurrentUser> {
        let request = self.authorized(self.http.get(self.endpoint("auth/me")?)).await?;
        self.execute(request).await
    }

    /// `GET /dashboard/stats`
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        let request = self
            .authorized(self.http.get(self.endpoint("dashboard/stats")?))
            .await?;
        self.execute(request).await
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn authorized(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        match self.token.read().await.as_deref() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ClientError::NotAuthenticated),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        debug!(url = %response.url(), status = %response.status(), "API response");

        let response = Self::check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        warn!(url = %url, status = %status, "API call failed");
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl BackOffice for ApiClient {
    async fn current_user(&self) -> ClientResult<CurrentUser> {
        self.me().await
    }

    async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        ApiClient::dashboard_stats(self).await
    }
}
