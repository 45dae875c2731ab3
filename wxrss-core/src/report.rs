use crate::model::{ReportOptions, WeatherRecord};

/// Render a weather record as a multi-line text report.
///
/// Returns `None` when no record is available, so an upstream fetch or
/// parse failure passes through without producing any output. Blocks
/// are appended in a fixed order (location, current conditions,
/// forecast) and joined with a single newline; rendering the same
/// record with the same options always yields byte-identical output.
pub fn render_report(record: Option<&WeatherRecord>, options: &ReportOptions) -> Option<String> {
    let record = record?;

    let mut report: Vec<String> = Vec::new();

    if options.location {
        if options.verbose {
            report.push("Location:".to_string());
        }

        report.push(format!("{} {}\n", record.city, record.region));
    }

    if !options.no_current {
        if options.verbose {
            report.push("Current conditions:".to_string());
        }

        report.push(current_conditions_line(record, options));
    }

    if options.forecast_days > 0 {
        if options.verbose {
            report.push("Forecast:".to_string());
        }

        for forecast in &record.forecasts {
            report.push(format!(
                "  {}\n    High: {high}{units}\n    Low: {low}{units}\n    Conditions: {cond}",
                forecast.date,
                high = forecast.high,
                low = forecast.low,
                cond = forecast.condition,
                units = record.units,
            ));
        }
    }

    Some(report.join("\n"))
}

/// Compose the current-conditions line. When both narrowing flags are
/// set, temperature wins and the conditions flag is ignored.
fn current_conditions_line(record: &WeatherRecord, options: &ReportOptions) -> String {
    match (options.conditions_only, options.temperature_only) {
        (_, true) => format!("{}{}\n", record.current_temp, record.units),
        (true, false) => format!("{}\n", record.current_condition),
        (false, false) => format!(
            "{}{}{}{}\n",
            record.current_temp, record.units, options.delimiter, record.current_condition
        ),
    }
}
