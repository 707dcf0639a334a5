use anyhow::Context;
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::ApiConfig;

/// HTTP client for the remote indicator API. Every call is a plain
/// request/response; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct IndicatorApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

pub fn get_api_client() -> anyhow::Result<IndicatorApiClient> {
    IndicatorApiClient::new(&ApiConfig::load()?)
}

impl IndicatorApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { base_url: config.base_url.clone(), token: config.token.clone(), http })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response_txt = self.send(self.request(Method::GET, path), path).await?;
        serde_json::from_str(&response_txt).with_context(|| format!("Invalid response from {path}"))
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let response_txt = self.send(self.request(Method::POST, path).json(body), path).await?;
        serde_json::from_str(&response_txt).with_context(|| format!("Invalid response from {path}"))
    }

    /// POST where only the status matters.
    pub async fn post_json_discard<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        self.send(self.request(Method::POST, path).json(body), path).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> anyhow::Result<String> {
        let t0 = std::time::Instant::now();
        let response = builder.send().await.with_context(|| format!("Request to {path} failed"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis();
        if status.is_client_error() || status.is_server_error() {
            tracing::error!("indicator api: {} {} ({}ms): {}", path, status, dt_ms, response_txt);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::info!("indicator api: {} {} ({}ms, len = {})", path, status, dt_ms, response_txt.len());
        Ok(response_txt)
    }
}
