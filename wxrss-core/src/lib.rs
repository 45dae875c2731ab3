//! Core library for the `wxrss` CLI.
//!
//! This crate defines:
//! - Feed endpoint configuration (URL template, namespace, day limit)
//! - Fetching the forecastrss XML document
//! - Parsing the document into a flat weather record
//! - Rendering the record as a text report
//!
//! It is used by `wxrss-cli`, but can also be reused by other binaries or services.

use thiserror::Error;

pub mod config;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod report;

pub use config::{DAYS_LIMIT, FeedConfig, WEATHER_NS};
pub use fetch::{FeedSource, FetchError, HttpFeedSource};
pub use model::{ForecastEntry, ReportOptions, WeatherRecord};
pub use parse::{ParseError, parse_feed};
pub use report::render_report;

/// Either half of the fetch-then-parse pipeline failing.
///
/// Callers must handle both outcomes explicitly; only the top-level
/// entry point is allowed to collapse an error into "no weather data".
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetch and parse the weather for a location code.
///
/// The metric flag and the forecast-day cap are taken from `options`;
/// the rest of the options only matter at render time.
pub async fn get_weather(
    source: &dyn FeedSource,
    location_code: &str,
    options: &ReportOptions,
) -> Result<WeatherRecord, WeatherError> {
    let doc = source.fetch_feed(location_code, options.metric).await?;
    let record = parse_feed(&doc, options.forecast_days)?;

    Ok(record)
}
