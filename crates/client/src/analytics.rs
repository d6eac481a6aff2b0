use chrono::NaiveDate;
use viewpoint_core::{
    BrowserShare, DailyTraffic, PageTraffic, Period, ResultTable, summarize_top_browsers,
};

use crate::error::Error;
use crate::query::{QueryClient, QueryOptions};

/// Server-side row cap used upstream for page and referrer reports.
pub const DEFAULT_PAGE_RESULTS: usize = 20;

/// Entry limit used upstream for the browser report.
pub const DEFAULT_BROWSER_RESULTS: usize = 10;

/// Compact date format used by the `ga:date` dimension.
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Typed report facade over a [`QueryClient`].
///
/// Each report method assembles the metrics string and query options for one
/// canned report, runs exactly one query against the client, and maps the
/// returned rows into typed records. Failures from the client propagate
/// unchanged; a response with no rows maps to an empty list, never an error.
///
/// The facade is a plain value: replacing the target view produces a new
/// facade via [`with_view_id`](Self::with_view_id) rather than mutating one
/// shared between calls.
#[derive(Debug, Clone)]
pub struct Analytics<C> {
    client: C,
    view_id: String,
}

impl<C: QueryClient> Analytics<C> {
    /// Create a facade querying the given view.
    pub fn new(client: C, view_id: impl Into<String>) -> Self {
        Self {
            client,
            view_id: view_id.into(),
        }
    }

    /// Return a facade targeting a different view, keeping the same client.
    #[must_use]
    pub fn with_view_id(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = view_id.into();
        self
    }

    /// The view this facade queries.
    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    /// The underlying query client.
    ///
    /// Escape hatch for queries the report methods do not cover; see also
    /// [`raw_query`](Self::raw_query).
    pub fn query_client(&self) -> &C {
        &self.client
    }

    /// Visitors and page views per day over the period.
    pub async fn fetch_visitors_and_page_views(
        &self,
        period: &Period,
    ) -> Result<Vec<DailyTraffic>, Error> {
        let options = QueryOptions::new().with_dimensions("ga:date");
        let table = self
            .client
            .perform_query(&self.view_id, period, "ga:users,ga:pageviews", &options)
            .await?;

        table
            .rows()
            .iter()
            .map(|row| {
                Ok(DailyTraffic {
                    date: compact_date(row, 0)?,
                    visitors: metric(row, 1)?,
                    page_views: metric(row, 2)?,
                })
            })
            .collect()
    }

    /// The `max_results` most viewed page paths over the period, descending
    /// by page views. Upstream default for `max_results` is
    /// [`DEFAULT_PAGE_RESULTS`].
    pub async fn fetch_most_visited_pages(
        &self,
        period: &Period,
        max_results: usize,
    ) -> Result<Vec<PageTraffic>, Error> {
        let options = QueryOptions::new()
            .with_dimensions("ga:pagePath")
            .with_sort("-ga:pageviews")
            .with_max_results(max_results);

        self.fetch_page_traffic(period, &options).await
    }

    /// The `max_results` referrers driving the most page views over the
    /// period, descending by page views. Upstream default for `max_results`
    /// is [`DEFAULT_PAGE_RESULTS`].
    pub async fn fetch_top_referrers(
        &self,
        period: &Period,
        max_results: usize,
    ) -> Result<Vec<PageTraffic>, Error> {
        let options = QueryOptions::new()
            .with_dimensions("ga:fullReferrer")
            .with_sort("-ga:pageviews")
            .with_max_results(max_results);

        self.fetch_page_traffic(period, &options).await
    }

    /// Browsers ranked by sessions over the period, compressed to at most
    /// `max_results` entries.
    ///
    /// The query itself is uncapped; when more than `max_results` browsers
    /// come back, everything past the first `max_results - 1` is folded into
    /// a single synthetic "Others" entry. Upstream default for `max_results`
    /// is [`DEFAULT_BROWSER_RESULTS`].
    pub async fn fetch_top_browsers(
        &self,
        period: &Period,
        max_results: usize,
    ) -> Result<Vec<BrowserShare>, Error> {
        let options = QueryOptions::new()
            .with_dimensions("ga:browser")
            .with_sort("-ga:sessions");
        let table = self
            .client
            .perform_query(&self.view_id, period, "ga:sessions", &options)
            .await?;

        let browsers = table
            .rows()
            .iter()
            .map(|row| {
                Ok(BrowserShare {
                    browser: cell(row, 0)?.to_owned(),
                    sessions: metric(row, 1)?,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        if browsers.len() <= max_results {
            return Ok(browsers);
        }

        Ok(summarize_top_browsers(browsers, max_results))
    }

    /// Run an arbitrary query against the current view and return the raw
    /// result table.
    ///
    /// Escape hatch for report shapes the named methods do not cover.
    pub async fn raw_query(
        &self,
        period: &Period,
        metrics: &str,
        options: &QueryOptions,
    ) -> Result<ResultTable, Error> {
        self.client
            .perform_query(&self.view_id, period, metrics, options)
            .await
    }

    /// Shared mapping for the page and referrer reports, which differ only
    /// in dimension.
    async fn fetch_page_traffic(
        &self,
        period: &Period,
        options: &QueryOptions,
    ) -> Result<Vec<PageTraffic>, Error> {
        let table = self
            .client
            .perform_query(&self.view_id, period, "ga:pageviews", options)
            .await?;

        table
            .rows()
            .iter()
            .map(|row| {
                Ok(PageTraffic {
                    url: cell(row, 0)?.to_owned(),
                    page_views: metric(row, 1)?,
                })
            })
            .collect()
    }
}

/// Fetch one cell of a result row by position.
fn cell(row: &[String], index: usize) -> Result<&str, Error> {
    row.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::Deserialization(format!("result row is missing cell {index}")))
}

/// Parse a metric cell into an integer.
fn metric(row: &[String], index: usize) -> Result<u64, Error> {
    let raw = cell(row, index)?;
    raw.parse().map_err(|_| {
        Error::Deserialization(format!("cell {index} is not an integer metric: {raw:?}"))
    })
}

/// Parse a `ga:date` dimension cell in compact `YYYYMMDD` form.
fn compact_date(row: &[String], index: usize) -> Result<NaiveDate, Error> {
    let raw = cell(row, index)?;
    NaiveDate::parse_from_str(raw, COMPACT_DATE_FORMAT)
        .map_err(|_| Error::Deserialization(format!("cell {index} is not a compact date: {raw:?}")))
}
