use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Visitors and page views for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTraffic {
    /// The day the measurements cover.
    pub date: NaiveDate,
    /// Unique visitors on that day.
    pub visitors: u64,
    /// Page views on that day.
    pub page_views: u64,
}

/// Page views attributed to a single URL.
///
/// Used both for the most-visited-pages report (the URL is a page path) and
/// the top-referrers report (the URL is a full referrer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTraffic {
    /// Page path or referrer URL.
    pub url: String,
    /// Page views attributed to the URL.
    pub page_views: u64,
}

/// Sessions attributed to a single browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserShare {
    /// Browser name as reported by the data source.
    pub browser: String,
    /// Session count for that browser.
    pub sessions: u64,
}

impl BrowserShare {
    /// Create a browser share entry.
    pub fn new(browser: impl Into<String>, sessions: u64) -> Self {
        Self {
            browser: browser.into(),
            sessions,
        }
    }
}
