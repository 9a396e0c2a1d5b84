use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

use crate::{
    api::{
        token::{LocalStorageTokenStore, TokenStore},
        types::{ApiError, ErrorBody},
    },
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_token_store(Rc::new(LocalStorageTokenStore))
    }

    pub fn with_token_store(tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            tokens,
        }
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Attaches `Authorization: Bearer <token>` when a token is stored.
    ///
    /// An unreadable token slot aborts the request; an empty slot sends it
    /// unauthenticated and leaves the rejection to the backend.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let builder = with_credentials(builder);
        match self.tokens.read_token()? {
            Some(token) => Ok(builder.header(AUTHORIZATION, format!("Bearer {}", token))),
            None => Ok(builder),
        }
    }

    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .http_client()
            .request(method, format!("{}{}", base_url, path));
        self.authorize(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Like [`Self::decode`], but an empty success body (204 included) or a
    /// JSON `null` is `None`.
    async fn decode_optional<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!(
                "Request failed with status {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ),
        };
        log::warn!("API responded {}: {}", status.as_u16(), message);
        ApiError::http(status.as_u16(), message)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await?.query(query);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::GET, path).await?.query(query);
        let response = self.send(builder).await?;
        Self::decode_optional(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).await?.json(body);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path).await?.json(body);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}
