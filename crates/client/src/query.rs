use serde::Serialize;
use viewpoint_core::{Period, ResultTable};

use crate::error::Error;

/// Optional query parameters recognized by the reporting API.
///
/// Serialized straight into the request query string, so field names follow
/// the wire format.
#[derive(Debug, Default, Clone, Serialize)]
pub struct QueryOptions {
    /// Comma-joined dimension names to group by, e.g. `ga:date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Metric to sort by; prefix with `-` for descending order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Server-side cap on the number of returned rows.
    #[serde(rename = "max-results", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl QueryOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group results by the given dimensions (comma-joined when several).
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    /// Sort results by the given metric; prefix with `-` for descending.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Cap the number of rows returned by the server.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// An authenticated client able to run one reporting query.
///
/// The [`Analytics`](crate::Analytics) facade is generic over this trait, so
/// tests can substitute a canned implementation and callers can wrap the
/// provided [`GoogleAnalyticsClient`](crate::GoogleAnalyticsClient) with
/// their own timeout or caching policy.
///
/// This trait is not object-safe because it uses native `async fn` methods;
/// the facade uses static dispatch.
pub trait QueryClient: Send + Sync {
    /// Run a query against the given view for the given period.
    ///
    /// An absent `rows` field in the response is a valid zero-result answer,
    /// not an error.
    fn perform_query(
        &self,
        view_id: &str,
        period: &Period,
        metrics: &str,
        options: &QueryOptions,
    ) -> impl std::future::Future<Output = Result<ResultTable, Error>> + Send;
}
