use roxmltree::{Document, Node};
use thiserror::Error;

use crate::config::WEATHER_NS;
use crate::model::{ForecastEntry, WeatherRecord};

/// Failure while extracting a weather record from a feed document.
///
/// The parser never substitutes defaults: if a required element or
/// attribute is absent the whole document is rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed feed document: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("feed document is missing the <{0}> element")]
    MissingElement(&'static str),

    #[error("feed <{element}> element is missing the '{attribute}' attribute")]
    MissingAttribute { element: &'static str, attribute: &'static str },
}

/// Extract the weather record from one forecastrss document.
///
/// Forecast elements are kept in document order and truncated to the
/// first `max_forecast_days` entries; zero means no forecasts are kept
/// regardless of how many the document carries.
pub fn parse_feed(doc: &str, max_forecast_days: u8) -> Result<WeatherRecord, ParseError> {
    let dom = Document::parse(doc)?;

    let units = find_element(&dom, "units")?;
    let location = find_element(&dom, "location")?;
    let condition = find_element(&dom, "condition")?;

    let forecasts = dom
        .descendants()
        .filter(|n| n.has_tag_name((WEATHER_NS, "forecast")))
        .take(usize::from(max_forecast_days))
        .map(|node| {
            Ok(ForecastEntry {
                date: required_attr(node, "forecast", "date")?,
                low: required_attr(node, "forecast", "low")?,
                high: required_attr(node, "forecast", "high")?,
                condition: required_attr(node, "forecast", "text")?,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    log::debug!("parsed weather record with {} forecast entries", forecasts.len());

    Ok(WeatherRecord {
        current_condition: required_attr(condition, "condition", "text")?,
        current_temp: required_attr(condition, "condition", "temp")?,
        units: required_attr(units, "units", "temperature")?,
        city: required_attr(location, "location", "city")?,
        region: required_attr(location, "location", "region")?,
        forecasts,
    })
}

fn find_element<'a, 'input>(
    dom: &'a Document<'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>, ParseError> {
    dom.descendants()
        .find(|n| n.has_tag_name((WEATHER_NS, name)))
        .ok_or(ParseError::MissingElement(name))
}

fn required_attr(
    node: Node<'_, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<String, ParseError> {
    node.attribute(attribute)
        .map(str::to_string)
        .ok_or(ParseError::MissingAttribute { element, attribute })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:yweather="http://xml.weather.yahoo.com/ns/rss/1.0">
  <channel>
    <title>Yahoo! Weather - Lincoln, NE</title>
    <yweather:location city="Lincoln" region="NE" country="US"/>
    <yweather:units temperature="F" distance="mi" pressure="in" speed="mph"/>
    <item>
      <yweather:condition text="Sunny" code="32" temp="72" date="Sat, 29 Aug 2026 1:53 pm CDT"/>
      <yweather:forecast day="Sat" date="29 Aug 2026" low="55" high="78" text="Clear" code="31"/>
      <yweather:forecast day="Sun" date="30 Aug 2026" low="58" high="81" text="Partly Cloudy" code="30"/>
      <yweather:forecast day="Mon" date="31 Aug 2026" low="60" high="83" text="Mostly Sunny" code="34"/>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn extracts_current_conditions_and_location() {
        let record = parse_feed(FEED, 0).unwrap();

        assert_eq!(record.current_condition, "Sunny");
        assert_eq!(record.current_temp, "72");
        assert_eq!(record.units, "F");
        assert_eq!(record.city, "Lincoln");
        assert_eq!(record.region, "NE");
        assert!(record.forecasts.is_empty());
    }

    #[test]
    fn truncates_forecasts_to_requested_days() {
        // The document carries three forecasts; only the cap changes
        // how many survive, always in document order.
        for days in 0..=2u8 {
            let record = parse_feed(FEED, days).unwrap();
            assert_eq!(record.forecasts.len(), usize::from(days));
        }

        let record = parse_feed(FEED, 2).unwrap();
        assert_eq!(record.forecasts[0].date, "29 Aug 2026");
        assert_eq!(record.forecasts[0].high, "78");
        assert_eq!(record.forecasts[0].low, "55");
        assert_eq!(record.forecasts[0].condition, "Clear");
        assert_eq!(record.forecasts[1].date, "30 Aug 2026");
        assert_eq!(record.forecasts[1].condition, "Partly Cloudy");
    }

    #[test]
    fn cap_larger_than_document_keeps_all_entries() {
        let one_day: String = FEED
            .lines()
            .filter(|line| !line.contains("day=\"Sun\"") && !line.contains("day=\"Mon\""))
            .collect::<Vec<_>>()
            .join("\n");

        let record = parse_feed(&one_day, 2).unwrap();
        assert_eq!(record.forecasts.len(), 1);
        assert_eq!(record.forecasts[0].condition, "Clear");
    }

    #[test]
    fn missing_units_element_is_rejected() {
        let doc = FEED.replace("yweather:units", "yweather:other");
        let err = parse_feed(&doc, 0).unwrap_err();
        assert!(matches!(err, ParseError::MissingElement("units")));
    }

    #[test]
    fn missing_condition_element_is_rejected() {
        let doc = FEED.replace("yweather:condition", "yweather:cond");
        let err = parse_feed(&doc, 0).unwrap_err();
        assert!(matches!(err, ParseError::MissingElement("condition")));
    }

    #[test]
    fn missing_required_attribute_is_rejected() {
        let doc = FEED.replace("temp=\"72\"", "");
        let err = parse_feed(&doc, 0).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingAttribute { element: "condition", attribute: "temp" }
        ));
    }

    #[test]
    fn elements_outside_the_weather_namespace_are_ignored() {
        let doc = FEED.replace(
            "<item>",
            "<item><units temperature=\"K\"/><condition text=\"Hail\" temp=\"0\"/>",
        );
        let record = parse_feed(&doc, 0).unwrap();
        assert_eq!(record.units, "F");
        assert_eq!(record.current_condition, "Sunny");
    }

    #[test]
    fn non_xml_input_is_rejected() {
        let err = parse_feed("503 Service Unavailable", 0).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }
}
