use std::future::Future;

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ProvisionError, Result};
use crate::models::sql::ExecSqlRequest;

/// Something that can run a batch of SQL and report the JSON result.
pub trait SqlExecutor {
    fn execute_sql(&self, query: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// Client for the hosted REST gateway's SQL RPC function.
pub struct SqlRpcClient {
    pub client: Client,
    pub endpoint: String,
    service_key: String,
}

impl SqlRpcClient {
    pub fn new(config: &Config, service_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.rpc_endpoint(),
            service_key: service_key.into(),
        }
    }
}

impl SqlExecutor for SqlRpcClient {
    /// Posts `{"query": ...}` once. The key goes in both `apikey` and
    /// `Authorization: Bearer`, which the gateway requires together.
    async fn execute_sql(&self, query: &str) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, bytes = query.len(), "submitting SQL batch");

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&ExecSqlRequest { query })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("SQL endpoint error {}: {}", status, text);
            return Err(ProvisionError::RemoteExecutionFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        // void functions answer 204 / empty body
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
