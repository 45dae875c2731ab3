use anyhow::bail;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use wxrss_core::{
    DAYS_LIMIT, FeedConfig, FeedSource, HttpFeedSource, ReportOptions, get_weather, render_report,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wxrss",
    version,
    about = "Fetches weather reports from Yahoo! Weather",
    after_help = "LOCATION_CODE selects the forecast region, e.g. a US zip code.\n\
                  See http://developer.yahoo.com/weather/#req"
)]
pub struct Cli {
    /// Location code for the region of interest.
    pub location_code: String,

    /// Suppress reporting the current weather conditions.
    #[arg(short = 'n', long)]
    pub no_current: bool,

    /// Use the given string as a delimiter between the temperature and the conditions.
    #[arg(short, long, value_name = "STRING", default_value = " and ")]
    pub delim: String,

    /// Show the forecast for DAYS days.
    #[arg(
        short,
        long,
        value_name = "DAYS",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=DAYS_LIMIT as i64)
    )]
    pub forecast: u8,

    /// Print the location of the weather.
    #[arg(short, long)]
    pub location: bool,

    /// Show the temperature in metric units (C).
    #[arg(short, long)]
    pub metric: bool,

    /// Print the weather section headers.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print only the current temperature.
    #[arg(short, long)]
    pub temperature: bool,

    /// Print only the current conditions.
    #[arg(short, long)]
    pub conditions: bool,

    /// Write the weather report to the specified file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let source = HttpFeedSource::new(FeedConfig::default());
        self.run_with_source(&source).await
    }

    async fn run_with_source(self, source: &dyn FeedSource) -> anyhow::Result<()> {
        let options = ReportOptions {
            no_current: self.no_current,
            location: self.location,
            verbose: self.verbose,
            forecast_days: self.forecast,
            metric: self.metric,
            temperature_only: self.temperature,
            conditions_only: self.conditions,
            delimiter: self.delim,
        };

        // Fetch and parse errors both collapse to "no report" here; the
        // formatter never sees error detail.
        let record = match get_weather(source, &self.location_code, &options).await {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("weather lookup for {} failed: {err}", self.location_code);
                None
            }
        };

        let Some(report) = render_report(record.as_ref(), &options) else {
            bail!("no weather data available");
        };

        match self.output {
            None => println!("{report}"),
            Some(path) => {
                // A write failure is reported but does not fail the run.
                if fs::write(&path, &report).is_err() {
                    eprintln!("Unable to open file {} for output", path.display());
                }
            }
        }

        Ok(())
    }
}
