//! Platform API client
//!
//! Implements `BillingApi` and `HealthSourceApi` against the Gantry REST
//! API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use gantry_console::services::{BillingApi, HealthSourceApi};
use shared::error::AppError;
use shared::models::{
    CreatedSubscription, LinkPaymentMethodRequest, MetricNode, MetricQuery, PriceCatalog,
    SubscriptionRequest, UsageSummary,
};

use crate::ClientConfig;
use crate::http::{handle_ack, handle_response, transport_error};

/// REST client for the platform API
#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PlatformClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| transport_error(&e))?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        tracing::debug!(path, "platform GET");
        let builder = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query);
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        tracing::debug!(path, "platform POST");
        let builder = self.client.post(format!("{}{}", self.base_url, path)).json(body);
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        handle_response(response).await
    }

    async fn post_ack<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), AppError> {
        tracing::debug!(path, "platform POST");
        let builder = self.client.post(format!("{}{}", self.base_url, path)).json(body);
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        handle_ack(response).await
    }
}

#[async_trait]
impl BillingApi for PlatformClient {
    async fn fetch_price_catalog(
        &self,
        account_id: &str,
        module: &str,
    ) -> Result<PriceCatalog, AppError> {
        self.get(
            &format!("/api/accounts/{account_id}/modules/{module}/prices"),
            &[],
        )
        .await
    }

    async fn fetch_usage(
        &self,
        account_id: &str,
        module: &str,
    ) -> Result<UsageSummary, AppError> {
        self.get(
            &format!("/api/accounts/{account_id}/modules/{module}/usage"),
            &[],
        )
        .await
    }

    async fn create_subscription(
        &self,
        account_id: &str,
        request: &SubscriptionRequest,
    ) -> Result<CreatedSubscription, AppError> {
        self.post(&format!("/api/accounts/{account_id}/subscriptions"), request)
            .await
    }

    async fn link_payment_method(
        &self,
        account_id: &str,
        request: &LinkPaymentMethodRequest,
    ) -> Result<(), AppError> {
        self.post_ack(
            &format!("/api/accounts/{account_id}/payment-methods"),
            request,
        )
        .await
    }

    async fn pay_invoice(&self, account_id: &str, invoice_id: &str) -> Result<(), AppError> {
        self.post_ack(
            &format!("/api/accounts/{account_id}/invoices/{invoice_id}/pay"),
            &serde_json::json!({}),
        )
        .await
    }
}

#[async_trait]
impl HealthSourceApi for PlatformClient {
    async fn metric_structure(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.get("/api/health-sources/metric-structure", &query.query_pairs())
            .await
    }

    async fn base_folders(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.get("/api/health-sources/base-folders", &query.query_pairs())
            .await
    }

    async fn metric_paths(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.get("/api/health-sources/metric-paths", &query.query_pairs())
            .await
    }
}
