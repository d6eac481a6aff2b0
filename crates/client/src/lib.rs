//! Viewpoint client
//!
//! A typed facade over the Google Analytics v3 reporting API: canned report
//! methods for visitors and page views, most visited pages, top referrers,
//! and top browsers, each returning plain record lists instead of positional
//! row arrays.
//!
//! # Quick Start
//!
//! ```no_run
//! use viewpoint_client::{Analytics, GoogleAnalyticsClient, GoogleConfig};
//! use viewpoint_core::Period;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), viewpoint_client::Error> {
//!     // The caller owns the OAuth flow; the client just needs the token.
//!     let client = GoogleAnalyticsClient::new(GoogleConfig::new("ya29.access-token"));
//!     let analytics = Analytics::new(client, "123456");
//!
//!     let traffic = analytics
//!         .fetch_visitors_and_page_views(&Period::days(7))
//!         .await?;
//!     for day in traffic {
//!         println!("{}: {} visitors, {} page views", day.date, day.visitors, day.page_views);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - Visitors and page views per day over a [`Period`](viewpoint_core::Period)
//! - Most visited pages and top referrers, capped server-side
//! - Top browsers with client-side "Others" overflow bucketing
//! - [`Analytics::raw_query`] escape hatch for uncovered query shapes
//!
//! # Bring your own client
//!
//! [`Analytics`] is generic over the [`QueryClient`] trait, so tests and
//! callers with their own transport policy can substitute an implementation:
//!
//! ```no_run
//! use viewpoint_client::{GoogleAnalyticsClient, GoogleConfig};
//!
//! let config = GoogleConfig::new("ya29.access-token")
//!     .with_api_base_url("http://localhost:8080");
//! let client = GoogleAnalyticsClient::new(config);
//! ```

mod analytics;
mod config;
mod error;
mod google;
mod query;

pub use analytics::{Analytics, DEFAULT_BROWSER_RESULTS, DEFAULT_PAGE_RESULTS};
pub use config::{DEFAULT_API_BASE_URL, GoogleConfig};
pub use error::Error;
pub use google::GoogleAnalyticsClient;
pub use query::{QueryClient, QueryOptions};
