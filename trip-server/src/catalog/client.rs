//! HTTP client for a remote catalog service.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL of the catalog service
    pub base_url: String,
    /// Optional API key sent in the x-apikey header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: 30,
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client that fetches whole catalog snapshots.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| CatalogError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full catalog.
    pub async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        let url = format!("{}/catalog", self.base_url);
        tracing::debug!(%url, "fetching catalog snapshot");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! A throwaway catalog service bound to an ephemeral local port.

    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::{HeaderMap, StatusCode};
    use axum::{Json, Router, extract::State, routing::get};

    use crate::catalog::CatalogSnapshot;

    #[derive(Clone)]
    struct ServerState {
        snapshot: Arc<CatalogSnapshot>,
        api_key: Option<String>,
        hits: Arc<AtomicUsize>,
    }

    async fn catalog(
        State(state): State<ServerState>,
        headers: HeaderMap,
    ) -> Result<Json<CatalogSnapshot>, StatusCode> {
        state.hits.fetch_add(1, Ordering::SeqCst);
        if let Some(expected) = &state.api_key {
            let given = headers.get("x-apikey").and_then(|v| v.to_str().ok());
            if given != Some(expected.as_str()) {
                return Err(StatusCode::UNAUTHORIZED);
            }
        }
        Ok(Json((*state.snapshot).clone()))
    }

    async fn broken() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "database down")
    }

    /// Start a server; returns its base URL and a request counter.
    pub async fn spawn(
        snapshot: CatalogSnapshot,
        api_key: Option<&str>,
    ) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = ServerState {
            snapshot: Arc::new(snapshot),
            api_key: api_key.map(str::to_string),
            hits: hits.clone(),
        };
        let app = Router::new()
            .route("/catalog", get(catalog))
            .route("/broken/catalog", get(broken))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Destination, DestinationId};

    fn sample() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![Destination::new(DestinationId(3), "Gilgit")],
            vec![],
            vec![],
        )
    }

    #[test]
    fn config_defaults() {
        let config = CatalogClientConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = CatalogClientConfig::new("http://catalog")
            .with_api_key("secret")
            .with_timeout_secs(5);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn invalid_api_key_rejected() {
        let config = CatalogClientConfig::new("http://catalog").with_api_key("bad\nkey");
        assert!(matches!(
            CatalogClient::new(config),
            Err(CatalogError::Api { status: 0, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_snapshot_from_server() {
        let (url, _) = test_server::spawn(sample(), None).await;
        let client = CatalogClient::new(CatalogClientConfig::new(format!("{url}/"))).unwrap();

        let snapshot = client.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot, sample());
    }

    #[tokio::test]
    async fn sends_api_key() {
        let (url, _) = test_server::spawn(sample(), Some("k3y")).await;

        let anonymous = CatalogClient::new(CatalogClientConfig::new(url.clone())).unwrap();
        assert!(matches!(
            anonymous.fetch_snapshot().await,
            Err(CatalogError::Unauthorized)
        ));

        let keyed = CatalogClient::new(CatalogClientConfig::new(url).with_api_key("k3y")).unwrap();
        assert!(keyed.fetch_snapshot().await.is_ok());
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let (url, _) = test_server::spawn(sample(), None).await;
        let client = CatalogClient::new(CatalogClientConfig::new(format!("{url}/broken"))).unwrap();

        match client.fetch_snapshot().await {
            Err(CatalogError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
