use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use viewpoint_core::{Period, ResultTable};

use crate::config::GoogleConfig;
use crate::error::Error;
use crate::query::{QueryClient, QueryOptions};

/// [`QueryClient`] implementation backed by the Google Analytics v3
/// reporting API.
///
/// Authentication is bearer-token only: the caller obtains an OAuth access
/// token through whatever flow suits its deployment and hands it over via
/// [`GoogleConfig`]. This client never refreshes or persists tokens.
pub struct GoogleAnalyticsClient {
    config: GoogleConfig,
    client: Client,
}

/// Error envelope returned by the Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl GoogleAnalyticsClient {
    /// Create a new client with the given configuration.
    ///
    /// Uses a default `reqwest::Client` with reasonable timeouts.
    pub fn new(config: GoogleConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new client with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool.
    pub fn with_client(config: GoogleConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// The underlying HTTP client.
    ///
    /// Escape hatch for API surface this crate does not wrap; requests built
    /// on it must attach their own authentication.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Full URL of the reporting data endpoint.
    fn data_url(&self) -> String {
        format!("{}/data/ga", self.config.api_base_url)
    }
}

impl QueryClient for GoogleAnalyticsClient {
    #[instrument(skip(self, period, options), fields(view_id = %view_id, metrics = %metrics))]
    async fn perform_query(
        &self,
        view_id: &str,
        period: &Period,
        metrics: &str,
        options: &QueryOptions,
    ) -> Result<ResultTable, Error> {
        debug!("running reporting query");

        let response = self
            .client
            .get(self.data_url())
            .bearer_auth(&self.config.access_token)
            .query(&[
                ("ids", format!("ga:{view_id}")),
                ("start-date", period.start.format("%Y-%m-%d").to_string()),
                ("end-date", period.end.format("%Y-%m-%d").to_string()),
                ("metrics", metrics.to_owned()),
            ])
            .query(options)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("analytics API rate limit hit");
            return Err(Error::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => Error::Api {
                    code: envelope.error.code,
                    message: envelope.error.message,
                },
                Err(_) => Error::Http {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        response
            .json::<ResultTable>()
            .await
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}
