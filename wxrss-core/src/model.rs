use serde::{Deserialize, Serialize};

/// One day's forecast as carried by the feed. All values are opaque
/// display strings; the temperature unit symbol is attached at render
/// time, it is not part of the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub low: String,
    pub high: String,
    pub condition: String,
}

/// The flat weather record extracted from one feed document.
///
/// A record is either fully populated or never produced at all: fetch
/// and parse failures surface as errors, not as partially filled
/// records. `forecasts` preserves document order and is capped at the
/// requested day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub current_condition: String,
    pub current_temp: String,
    pub units: String,
    pub city: String,
    pub region: String,
    pub forecasts: Vec<ForecastEntry>,
}

/// Display options for one report. Constructed once per invocation,
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Suppress the current-conditions block.
    pub no_current: bool,
    /// Include the "{city} {region}" location block.
    pub location: bool,
    /// Print section headers before each block.
    pub verbose: bool,
    /// Number of forecast days to report, 0..=DAYS_LIMIT.
    pub forecast_days: u8,
    /// Request metric units from the feed.
    pub metric: bool,
    /// Report only the current temperature.
    pub temperature_only: bool,
    /// Report only the current conditions text.
    pub conditions_only: bool,
    /// Separator between temperature and conditions text.
    pub delimiter: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            no_current: false,
            location: false,
            verbose: false,
            forecast_days: 0,
            metric: false,
            temperature_only: false,
            conditions_only: false,
            delimiter: " and ".to_string(),
        }
    }
}
