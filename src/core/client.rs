//! Watson Tone Analyzer client
//!
//! This module provides the HTTP client for the upstream tone analysis
//! endpoint. Credentials are fixed at construction and attached to every
//! call as basic auth; version, sentence flag, and tone filter are
//! configured through chained mutators and read at call time.

use crate::core::constants::{query, DEFAULT_VERSION, GET_TEXT_LIMIT};
use crate::core::service::{ToneAnalyzer, ToneError};
use crate::models::tone::{AnalyzeRequest, ToneCategory, ToneRequestBody, ToneResponse};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Client for the Watson Tone Analyzer API
///
/// Each `request` call is a single independent round trip: no retries, no
/// caching, no connection-reuse guarantees beyond what reqwest provides.
#[derive(Clone)]
pub struct WatsonClient {
    http: Client,
    username: String,
    password: String,
    base_url: String,
    version: String,
    sentences: bool,
    tones: Option<ToneCategory>,
}

impl WatsonClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `username` - Service username, must be non-empty
    /// * `password` - Service password, must be non-empty
    /// * `base_url` - Upstream endpoint URL
    /// * `timeout` - Request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns `ToneError::InvalidCredentials` when either credential is
    /// empty, `ToneError::Unexpected` when the HTTP client cannot be built.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
        timeout: u64,
    ) -> Result<Self, ToneError> {
        let username = username.into();
        let password = password.into();

        if username.is_empty() || password.is_empty() {
            return Err(ToneError::InvalidCredentials(
                "username and password must be non-empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| ToneError::Unexpected(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            username,
            password,
            base_url: base_url.into(),
            version: DEFAULT_VERSION.to_string(),
            sentences: true,
            tones: None,
        })
    }

    /// Set the API version sent with every call
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable sentence-level analysis
    pub fn sentences(mut self, sentences: bool) -> Self {
        self.sentences = sentences;
        self
    }

    /// Restrict the analysis to a single tone category
    ///
    /// Unrecognized values are ignored: no error, and a previously set
    /// filter stays in place.
    pub fn tones(mut self, tones: &str) -> Self {
        if let Some(category) = ToneCategory::parse(tones) {
            self.tones = Some(category);
        }
        self
    }

    /// Select the transport method by text byte length
    ///
    /// Short texts travel as a GET query parameter; texts at or above the
    /// limit are sent as a JSON POST body to avoid URL-length failures.
    fn transport_method(text: &str) -> Method {
        if text.len() < GET_TEXT_LIMIT {
            Method::GET
        } else {
            Method::POST
        }
    }

    /// Build the query parameters carried by every call
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (query::VERSION, self.version.clone()),
            (query::SENTENCES, self.sentences.to_string()),
        ];
        if let Some(tones) = self.tones {
            params.push((query::TONES, tones.as_str().to_string()));
        }
        params
    }

    /// Perform one analysis round trip
    ///
    /// A non-2xx upstream status is surfaced as a normal `ToneResponse`
    /// with that status and whatever body the API returned.
    ///
    /// # Errors
    ///
    /// Returns `ToneError::Transport` when the call fails below the HTTP
    /// layer (connect, DNS, timeout) or the body cannot be read.
    pub async fn request(&self, text: &str) -> Result<ToneResponse, ToneError> {
        let mut params = self.query_params();

        let request = if Self::transport_method(text) == Method::GET {
            params.push((query::TEXT, text.to_string()));
            self.http.get(&self.base_url)
        } else {
            self.http.post(&self.base_url).json(&ToneRequestBody {
                text: text.to_string(),
            })
        };

        debug!(bytes = text.len(), "sending tone analysis request");

        let response = request
            .query(&params)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ToneError::Transport(e.to_string()))?;

        Self::normalize(response).await
    }

    /// Turn a raw HTTP response into the normalized shape
    async fn normalize(response: reqwest::Response) -> Result<ToneResponse, ToneError> {
        let status_code = response.status().as_u16();

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ToneError::Transport(e.to_string()))?;

        Ok(ToneResponse {
            status_code,
            headers,
            body,
        })
    }
}

#[async_trait]
impl ToneAnalyzer for WatsonClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<ToneResponse, ToneError> {
        let mut client = self.clone().sentences(request.sentences);
        if let Some(tones) = request.tones {
            client = client.tones(tones.as_str());
        }
        client.request(&request.text).await
    }

    fn service_name(&self) -> &str {
        "Watson Tone Analyzer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::API_ENDPOINT;

    fn create_test_client() -> WatsonClient {
        WatsonClient::new("user", "pass", API_ENDPOINT, 90).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_username() {
        let result = WatsonClient::new("", "pass", API_ENDPOINT, 90);
        assert!(matches!(result, Err(ToneError::InvalidCredentials(_))));
    }

    #[test]
    fn test_new_rejects_empty_password() {
        let result = WatsonClient::new("user", "", API_ENDPOINT, 90);
        assert!(matches!(result, Err(ToneError::InvalidCredentials(_))));
    }

    #[test]
    fn test_short_text_uses_get() {
        let text = "a".repeat(GET_TEXT_LIMIT - 1);
        assert_eq!(WatsonClient::transport_method(&text), Method::GET);
    }

    #[test]
    fn test_text_at_limit_uses_post() {
        let text = "a".repeat(GET_TEXT_LIMIT);
        assert_eq!(WatsonClient::transport_method(&text), Method::POST);
    }

    #[test]
    fn test_threshold_counts_bytes_not_chars() {
        // 4096 two-byte characters reach the 8192-byte limit
        let text = "é".repeat(GET_TEXT_LIMIT / 2);
        assert_eq!(WatsonClient::transport_method(&text), Method::POST);
    }

    #[test]
    fn test_default_query_params() {
        let client = create_test_client();
        let params = client.query_params();
        assert_eq!(
            params,
            vec![
                ("version", DEFAULT_VERSION.to_string()),
                ("sentences", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_sentences_flag_serializes_as_false() {
        let client = create_test_client().sentences(false);
        let params = client.query_params();
        assert!(params.contains(&("sentences", "false".to_string())));
    }

    #[test]
    fn test_recognized_tone_filter_is_appended() {
        let client = create_test_client().tones("emotion");
        let params = client.query_params();
        assert!(params.contains(&("tones", "emotion".to_string())));
    }

    #[test]
    fn test_unrecognized_tone_filter_is_ignored() {
        let client = create_test_client().tones("invalid");
        let params = client.query_params();
        assert!(!params.iter().any(|(name, _)| *name == "tones"));
    }

    #[test]
    fn test_unrecognized_tone_filter_keeps_previous_value() {
        let client = create_test_client().tones("social").tones("bogus");
        let params = client.query_params();
        assert!(params.contains(&("tones", "social".to_string())));
    }

    #[test]
    fn test_version_override() {
        let client = create_test_client().version("2017-09-21");
        let params = client.query_params();
        assert!(params.contains(&("version", "2017-09-21".to_string())));
    }
}
