use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

pub const DEFAULT_CRM_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CRM_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct CrmClient {
    base_url: String,
    api_token: Option<String>,
    http: reqwest::Client,
}

/// Client configured from `CRM_API_URL`, `CRM_API_TOKEN` and `CRM_API_TIMEOUT_SECS`.
pub fn get_crm_client() -> anyhow::Result<CrmClient> {
    let base_url = std::env::var("CRM_API_URL").unwrap_or(DEFAULT_CRM_API_URL.to_string());
    let api_token = std::env::var("CRM_API_TOKEN").ok().filter(|t| !t.is_empty());
    let timeout_secs = match std::env::var("CRM_API_TIMEOUT_SECS") {
        Ok(v) => v.parse::<u64>().map_err(|e| anyhow::anyhow!("Invalid CRM_API_TIMEOUT_SECS {:?}: {}", v, e))?,
        Err(_) => DEFAULT_CRM_API_TIMEOUT_SECS,
    };
    CrmClient::new(base_url, api_token, Duration::from_secs(timeout_secs))
}

impl CrmClient {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), api_token, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> anyhow::Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        let response_txt = self.send("GET", path, request).await?;
        Ok(serde_json::from_str(&response_txt)?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        let response_txt = self.send("POST", path, request).await?;
        Ok(serde_json::from_str(&response_txt)?)
    }

    /// POST whose answer is not interpreted; an empty body reads as `null`.
    pub async fn post_for_value<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> anyhow::Result<serde_json::Value> {
        let request = self.http.post(self.url(path)).json(body);
        let response_txt = self.send("POST", path, request).await?;
        if response_txt.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&response_txt)?)
    }

    async fn send(&self, method: &str, path: &str, request: reqwest::RequestBuilder) -> anyhow::Result<String> {
        let t0 = std::time::Instant::now();
        let response = self.authorized(request).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis() as u64;
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!(method, path, status = status.as_u16(), dt_ms, "CRM request failed");
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::debug!(method, path, status = status.as_u16(), dt_ms, len = response_txt.len(), "CRM request done");
        Ok(response_txt)
    }
}
