//! REST client for the items API.

use async_trait::async_trait;
use items_core::{
    ApiResponse, CreateItemInput, ErrorResponse, HealthResponse, Item, ItemId, ListQuery,
    MessageResponse, Page, UpdateItemInput,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult, UNKNOWN_ERROR};

/// Default server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Operations the data hook needs from the server.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// GET /health
    async fn health(&self) -> ClientResult<HealthResponse>;

    /// GET /items
    async fn list(&self, query: &ListQuery) -> ClientResult<Page<Item>>;

    /// GET /items/{id}
    async fn get(&self, id: ItemId) -> ClientResult<Item>;

    /// POST /items
    async fn create(&self, input: &CreateItemInput) -> ClientResult<Item>;

    /// PUT /items/{id}
    async fn update(&self, id: ItemId, input: &UpdateItemInput) -> ClientResult<Item>;

    /// DELETE /items/{id}. Returns the server's confirmation message.
    async fn delete(&self, id: ItemId) -> ClientResult<String>;
}

/// [`ItemsApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|e| ClientError::Network(e.to_string()));
        }

        Err(match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(envelope) => ClientError::Api {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
                details: envelope.error.details,
            },
            Err(_) => ClientError::Api {
                status: status.as_u16(),
                code: UNKNOWN_ERROR.to_string(),
                message: format!("HTTP {status}"),
                details: Vec::new(),
            },
        })
    }
}

#[async_trait]
impl ItemsApi for ApiClient {
    async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(self.request(Method::GET, "/health")).await
    }

    async fn list(&self, query: &ListQuery) -> ClientResult<Page<Item>> {
        let request = self.request(Method::GET, "/items").query(query);
        let response: ApiResponse<Page<Item>> = self.send(request).await?;
        Ok(response.data)
    }

    async fn get(&self, id: ItemId) -> ClientResult<Item> {
        let response: ApiResponse<Item> =
            self.send(self.request(Method::GET, &format!("/items/{id}"))).await?;
        Ok(response.data)
    }

    async fn create(&self, input: &CreateItemInput) -> ClientResult<Item> {
        let request = self.request(Method::POST, "/items").json(input);
        let response: ApiResponse<Item> = self.send(request).await?;
        Ok(response.data)
    }

    async fn update(&self, id: ItemId, input: &UpdateItemInput) -> ClientResult<Item> {
        let request = self.request(Method::PUT, &format!("/items/{id}")).json(input);
        let response: ApiResponse<Item> = self.send(request).await?;
        Ok(response.data)
    }

    async fn delete(&self, id: ItemId) -> ClientResult<String> {
        let response: MessageResponse =
            self.send(self.request(Method::DELETE, &format!("/items/{id}"))).await?;
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let err = client.health().await.unwrap_err();

        assert!(matches!(err, ClientError::Network(_)));
        assert!(err.to_string().starts_with("Network error: "));
        assert_eq!(err.status(), None);
    }
}
