use serde::{Deserialize, Serialize};

/// Yahoo!'s limit on the number of days they will forecast.
pub const DAYS_LIMIT: u8 = 2;

/// Namespace used by the forecastrss feed elements.
pub const WEATHER_NS: &str = "http://xml.weather.yahoo.com/ns/rss/1.0";

const FEED_PATH: &str = "/forecastrss";
const METRIC_PARAMETER: &str = "&u=c";

/// Endpoint configuration for the weather feed.
///
/// The default points at the Yahoo! host; the base URL is only ever
/// overridden by tests. Nothing here is read from disk or from the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub base_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { base_url: "https://xml.weather.yahoo.com".to_string() }
    }
}

impl FeedConfig {
    /// Build the request URL for a location code, appending the metric
    /// query parameter when Celsius output is requested.
    pub fn forecast_url(&self, location_code: &str, metric: bool) -> String {
        let mut url = format!("{}{}?p={}", self.base_url, FEED_PATH, location_code);

        if metric {
            url.push_str(METRIC_PARAMETER);
        }

        url
    }
}
