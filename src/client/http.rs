//! Shared HTTP plumbing: bearer token storage and a JSON request helper

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::core::error::{GymError, TransportError};

#[derive(Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// The admin's bearer token, shared by every API handle
///
/// Kept in memory, and mirrored to a JSON file when a path is configured so
/// a later session starts logged in.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
    path: Option<PathBuf>,
}

impl TokenStore {
    /// In-memory only
    pub fn new() -> Self {
        Self::default()
    }

    /// Backed by `path`; an existing file is read immediately
    pub fn persistent(path: impl Into<PathBuf>) -> Result<Self, GymError> {
        let path = path.into();
        let token = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| storage_error(&path, e))?;
            let stored: StoredToken =
                serde_json::from_str(&raw).map_err(|e| storage_error(&path, e))?;
            Some(stored.access_token)
        } else {
            None
        };

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            path: Some(path),
        })
    }

    pub fn get(&self) -> Option<String> {
        match self.token.read() {
            Ok(token) => token.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    pub fn set(&self, token: impl Into<String>) -> Result<(), GymError> {
        let token = token.into();
        if let Some(path) = &self.path {
            let body = serde_json::to_string(&StoredToken {
                access_token: token.clone(),
            })
            .map_err(|e| storage_error(path, e))?;
            std::fs::write(path, body).map_err(|e| storage_error(path, e))?;
        }
        self.replace(Some(token));
        Ok(())
    }

    pub fn clear(&self) -> Result<(), GymError> {
        self.replace(None);
        if let Some(path) = self.path.as_deref().filter(|p| p.exists()) {
            std::fs::remove_file(path).map_err(|e| storage_error(path, e))?;
        }
        Ok(())
    }

    fn replace(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut slot) => *slot = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }
}

fn storage_error(path: &Path, e: impl std::fmt::Display) -> GymError {
    GymError::Storage(format!("{}: {}", path.display(), e))
}

/// Error body returned by the backend
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// JSON-over-HTTP client for the admin API
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl RestClient {
    pub fn new(base_url: &str, timeout: Duration, tokens: TokenStore) -> Result<Self, GymError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GymError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Build the client and token store described by `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, GymError> {
        let tokens = match &config.token_path {
            Some(path) => TokenStore::persistent(path)?,
            None => TokenStore::new(),
        };
        Self::new(
            config.api_root(),
            Duration::from_secs(config.timeout_secs),
            tokens,
        )
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        let resp = self.send(self.request(reqwest::Method::GET, path)).await?;
        Self::decode(resp).await
    }

    pub async fn get_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, TransportError> {
        let req = self.request(reqwest::Method::GET, path).query(query);
        let resp = self.send(req).await?;
        Self::decode(resp).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError> {
        let req = self.request(reqwest::Method::POST, path).json(body);
        let resp = self.send(req).await?;
        Self::decode(resp).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError> {
        let req = self.request(reqwest::Method::PUT, path).json(body);
        let resp = self.send(req).await?;
        Self::decode(resp).await
    }

    /// DELETE; the response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), TransportError> {
        self.send(self.request(reqwest::Method::DELETE, path))
            .await
            .map(|_| ())
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, TransportError> {
        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %text, "backend rejected request");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TransportError::Unauthorized),
            _ => Err(TransportError::Status {
                status: status.as_u16(),
                detail: parse_detail(&text),
            }),
        }
    }

    async fn decode<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, TransportError> {
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// `detail` of an error body: the string itself, or the JSON text of anything else
fn parse_detail(text: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(text).ok()?;
    match body.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
