//! # HTTP Router Adapter
//!
//! Production [`RouterClient`] implementation over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared_types::RelayMessage;

use crate::client::RouterClient;
use crate::error::RouterError;
use crate::types::{EnqueueRequest, PairResponse, RegisterResponse, RouterAuth};

/// HTTP client for the relay router.
pub struct HttpRouterClient {
    client: Client,
    base_url: String,
}

impl HttpRouterClient {
    /// Create a client for a router base URL (e.g. `https://router.example`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RouterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(RouterError::Http)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with auth query parameters, decoding a JSON body.
    async fn get_json<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        auth: Option<&RouterAuth>,
    ) -> Result<R, RouterError> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = auth {
            request = request.query(&[("identity", &auth.identity), ("token", &auth.token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouterError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| RouterError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RouterClient for HttpRouterClient {
    async fn register(&self) -> Result<RegisterResponse, RouterError> {
        self.get_json("/register", None).await
    }

    async fn pair(&self, auth: &RouterAuth) -> Result<PairResponse, RouterError> {
        self.get_json("/pair", Some(auth)).await
    }

    async fn enqueue(
        &self,
        auth: &RouterAuth,
        recipient: &str,
        message: &RelayMessage,
    ) -> Result<(), RouterError> {
        let data = serde_json::to_string(message)
            .map_err(|e| RouterError::Decode(e.to_string()))?;
        let body = EnqueueRequest {
            identity: auth.identity.clone(),
            token: auth.token.clone(),
            address: recipient.to_string(),
            data,
        };

        let response = self
            .client
            .post(self.url("/enqueue"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouterError::Status {
                path: "/enqueue".to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn dequeue(&self, auth: &RouterAuth) -> Result<RelayMessage, RouterError> {
        let path = "/dequeue";
        let request = self
            .client
            .get(self.url(path))
            .query(&[("identity", &auth.identity), ("token", &auth.token)]);

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(RouterError::EmptyQueue);
        }
        if !status.is_success() {
            return Err(RouterError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<RelayMessage>()
            .await
            .map_err(|e| RouterError::Decode(e.to_string()))
    }
}
