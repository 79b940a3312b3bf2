//! Open Trivia Database API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use trivia_core::error::FetchError;
use trivia_core::model::RawQuestion;
use trivia_core::traits::QuestionSource;

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
pub const DEFAULT_AMOUNT: u32 = 10;
const ENCODING: &str = "base64";
const STATUS_OK: u16 = 200;

/// Client for `GET /api.php` on the Open Trivia Database.
///
/// No timeout and no retry: a slow API only delays startup.
pub struct OpenTdbSource {
    base_url: String,
    client: reqwest::Client,
}

impl OpenTdbSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Full request URL for `amount` base64-encoded questions.
    pub fn request_url(&self, amount: u32) -> String {
        format!(
            "{}/api.php?amount={amount}&encode={ENCODING}",
            self.base_url
        )
    }
}

#[derive(Deserialize)]
struct OpenTdbResponse {
    #[serde(default)]
    response_code: i64,
    results: Vec<RawQuestion>,
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    fn name(&self) -> &str {
        "opentdb"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch(&self, amount: u32) -> anyhow::Result<Vec<RawQuestion>> {
        let url = self.request_url(amount);
        debug!(%url, "requesting questions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != STATUS_OK {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body }.into());
        }

        let api_response: OpenTdbResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        if api_response.response_code != 0 {
            warn!(
                response_code = api_response.response_code,
                results = api_response.results.len(),
                "API reported a non-zero response code"
            );
        }
        debug!(results = api_response.results.len(), "received questions");

        Ok(api_response.results)
    }
}
