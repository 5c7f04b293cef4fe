//! HTTP client for end-to-end tests
//!
//! This module wraps reqwest and provides methods for every dashboard endpoint.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_page(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Page request failed")
    }

    /// GET /v1/dashboard/layout
    pub async fn get_layout(&self) -> Response {
        self.client
            .get(format!("{}/v1/dashboard/layout", self.base_url))
            .send()
            .await
            .expect("Layout request failed")
    }

    /// GET /v1/dashboard/layout, parsed
    pub async fn layout_json(&self) -> Value {
        self.get_layout()
            .await
            .json()
            .await
            .expect("Layout was not JSON")
    }

    /// POST /v1/dashboard/update
    pub async fn post_update(&self, values: &Value, changed: &str) -> Response {
        self.client
            .post(format!("{}/v1/dashboard/update", self.base_url))
            .json(&json!({ "values": values, "changed": changed }))
            .send()
            .await
            .expect("Update request failed")
    }

    /// GET /v1/dashboard/chart/{slot}
    pub async fn get_chart(&self, slot: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}/v1/dashboard/chart/{}", self.base_url, slot))
            .query(query)
            .send()
            .await
            .expect("Chart request failed")
    }
}
