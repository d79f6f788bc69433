//! Planner backend client

use crate::domain::{Hotel, PlanRequest};
use crate::error::{Result, WayfareError};
use crate::infrastructure::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Body returned by the planning endpoint
#[derive(Debug, Deserialize)]
struct PlanResponse {
    itinerary_markdown: String,
}

/// Error body returned by the backend; `detail` may be a string or a list
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// The three endpoints the trip flow consumes
#[async_trait]
pub trait PlannerApi: Send + Sync {
    /// Generate an itinerary; returns its markdown
    async fn plan(&self, request: &PlanRequest) -> Result<String>;

    /// Image URLs for a destination, in display order
    async fn images(&self, destination: &str, count: usize) -> Result<Vec<String>>;

    /// Hotel recommendations for a destination
    async fn hotels(&self, destination: &str, count: usize) -> Result<Vec<Hotel>>;
}

/// HTTP implementation of [`PlannerApi`]
pub struct HttpPlannerApi {
    client: Client,
    base: String,
}

impl HttpPlannerApi {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpPlannerApi {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.get_api_base(), config.timeout())
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

/// Turn a non-success planning response into an error carrying the
/// backend's `detail` when it has one.
async fn error_from_response(response: reqwest::Response) -> WayfareError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail)
        .map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });

    WayfareError::Api(detail.unwrap_or_else(|| format!("HTTP {}", status.as_u16())))
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn plan(&self, request: &PlanRequest) -> Result<String> {
        let url = format!("{}/plan", self.base);
        tracing::info!(%url, destination = %request.destination, days = request.days, "requesting itinerary");

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: PlanResponse = response.json().await?;
        Ok(body.itinerary_markdown)
    }

    async fn images(&self, destination: &str, count: usize) -> Result<Vec<String>> {
        let url = format!("{}/images", self.base);
        tracing::debug!(%url, destination, count, "requesting images");

        let count = count.to_string();
        let urls = self
            .client
            .get(&url)
            .query(&[("destination", destination), ("count", count.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<String>>()
            .await?;

        Ok(urls)
    }

    async fn hotels(&self, destination: &str, count: usize) -> Result<Vec<Hotel>> {
        let url = format!("{}/hotels", self.base);
        tracing::debug!(%url, destination, count, "requesting hotels");

        let count = count.to_string();
        let hotels = self
            .client
            .get(&url)
            .query(&[("destination", destination), ("count", count.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Hotel>>()
            .await?;

        Ok(hotels)
    }
}
