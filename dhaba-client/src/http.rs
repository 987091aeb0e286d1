//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    CustomerRecord, OrderRecord, OrderSubmission, PlaceOrderResponse, ProcessedOrder,
};

use crate::{ClientConfig, ClientError, ClientResult, OrderApi};

/// HTTP client for making network requests to the order server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-success statuses map to typed errors; success bodies are decoded
    /// from text so a malformed body surfaces as `ClientError::Decode`.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[async_trait]
impl OrderApi for HttpClient {
    async fn place_order(&self, order: &OrderSubmission) -> ClientResult<PlaceOrderResponse> {
        self.post("/api/place_order", order)
            .await
            .inspect_err(|e| tracing::error!("Error placing order: {e}"))
    }

    async fn process_next_order(&self) -> ClientResult<ProcessedOrder> {
        self.post_empty("/api/process_order")
            .await
            .inspect_err(|e| tracing::error!("Error processing order: {e}"))
    }

    async fn order_history(&self, mobile_number: Option<&str>) -> ClientResult<Vec<OrderRecord>> {
        let query: Vec<(&str, &str)> = mobile_number
            .map(|mobile| ("mobile_number", mobile))
            .into_iter()
            .collect();

        self.get("/api/order_history", &query)
            .await
            .inspect_err(|e| tracing::error!("Error fetching order history: {e}"))
    }

    async fn customer_records(&self) -> ClientResult<Vec<CustomerRecord>> {
        self.get("/api/customer_records", &[])
            .await
            .inspect_err(|e| tracing::error!("Error fetching customer records: {e}"))
    }

    async fn pending_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.get("/api/pending_orders", &[])
            .await
            .inspect_err(|e| tracing::error!("Error fetching pending orders: {e}"))
    }

    async fn todays_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.get("/api/todays_orders", &[])
            .await
            .inspect_err(|e| tracing::error!("Error fetching today's orders: {e}"))
    }
}
