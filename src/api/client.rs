use super::{ApiError, ApiResult, VariantSource};
use crate::config::Config;
use crate::types::{Mutation, ParentSequenceData};
use serde::de::DeserializeOwned;
use std::time::Duration;

const VARIANTS_PATH: &str = "visualizer/variants";
const PARENT_SEQUENCE_PATH: &str = "visualizer/parent-sequence";

#[derive(Debug, thiserror::Error)]
enum RequestError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
}

/// HTTP client for the visualizer backend.
pub struct VisualizerClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl VisualizerClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body. An empty or `null` body decodes to `None`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, RequestError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let body = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(decode_body(&body)?)
    }

    pub async fn fetch_mutation_data(&self) -> ApiResult<Vec<Mutation>> {
        match self.get_json::<Vec<Mutation>>(VARIANTS_PATH).await {
            Ok(data) => {
                let variants = data.unwrap_or_default();
                log::info!("Fetched {} variants from {}", variants.len(), self.base_url);
                Ok(variants)
            }
            Err(e) => {
                log::error!("Error fetching mutation data: {}", e);
                Err(ApiError::Fetch {
                    endpoint: self.url(VARIANTS_PATH),
                    message: e.to_string(),
                })
            }
        }
    }

    pub async fn fetch_parent_sequence_data(&self) -> ApiResult<ParentSequenceData> {
        match self.get_json::<ParentSequenceData>(PARENT_SEQUENCE_PATH).await {
            Ok(data) => {
                let parent = data.unwrap_or_default();
                log::info!(
                    "Fetched parent sequence ({} residues) from {}",
                    parent.sequence.len(),
                    self.base_url
                );
                Ok(parent)
            }
            Err(e) => {
                log::error!("Error fetching parent sequence data: {}", e);
                Err(ApiError::Fetch {
                    endpoint: self.url(PARENT_SEQUENCE_PATH),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Like [`fetch_parent_sequence_data`](Self::fetch_parent_sequence_data),
    /// but a failed request yields an empty sequence instead of an error.
    pub async fn fetch_parent_sequence_data_or_empty(&self) -> ParentSequenceData {
        self.fetch_parent_sequence_data()
            .await
            .unwrap_or_default()
    }
}

impl VariantSource for VisualizerClient {
    async fn fetch_mutation_data(&self) -> ApiResult<Vec<Mutation>> {
        VisualizerClient::fetch_mutation_data(self).await
    }

    async fn fetch_parent_sequence_data(&self) -> ApiResult<ParentSequenceData> {
        VisualizerClient::fetch_parent_sequence_data(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = VisualizerClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(VARIANTS_PATH),
            "http://localhost:8000/visualizer/variants"
        );
        assert_eq!(
            client.url(PARENT_SEQUENCE_PATH),
            "http://localhost:8000/visualizer/parent-sequence"
        );
    }

    #[test]
    fn test_decode_blank_and_null_bodies() {
        assert_eq!(decode_body::<Vec<Mutation>>(b"").unwrap(), None);
        assert_eq!(decode_body::<Vec<Mutation>>(b" \r\n").unwrap(), None);
        assert_eq!(decode_body::<Vec<Mutation>>(b"null").unwrap(), None);
        assert_eq!(
            decode_body::<ParentSequenceData>(br#"{"sequence": "MKV"}"#).unwrap(),
            Some(ParentSequenceData {
                sequence: "MKV".to_string()
            })
        );
        assert!(decode_body::<Vec<Mutation>>(b"[{").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            api_base_url: "http://api.example.org/v1".to_string(),
            request_timeout: 10,
        };
        let client = VisualizerClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://api.example.org/v1");
    }
}
