//! HTTP client for talking to the translation and language-model services

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP response from an upstream service
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ApiResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper shared by all upstream services
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(concat!("sahayak/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// GET request with query parameters
    ///
    /// Parameters are sent in order, repeated keys included.
    pub async fn get_with_params(&self, url: &str, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let mut req_builder = self.client.get(url).query(params);

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;
        Self::parse_response(response).await
    }

    /// POST with JSON body and optional bearer token
    pub async fn post_json(
        &self,
        url: &str,
        json: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut req_builder = self.client.post(url).json(json);

        if let Some(token) = bearer {
            req_builder = req_builder.bearer_auth(token);
        }
        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;
        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse { status, text })
    }
}
