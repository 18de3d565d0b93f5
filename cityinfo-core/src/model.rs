//! Domain data structures for weather facts and the combined city record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Current weather reported by a weather provider.
pub struct Weather {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Short human-readable summary such as "light rain".
    pub summary: String,
}

impl Weather {
    /// Construct a weather fact.
    #[must_use]
    pub fn new<S: Into<String>>(temperature: f64, summary: S) -> Self {
        Self {
            temperature,
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Current information about a city, combined from all providers.
///
/// Only ever built from a successful weather lookup *and* a successful
/// description lookup.
pub struct CityInfo {
    /// Encyclopedic description of the city.
    pub description: String,
    /// Weather summary, e.g. "hot and sandy".
    pub weather_situation: String,
    /// Temperature formatted with exactly one fractional digit.
    pub temperature: String,
}

impl CityInfo {
    /// Join a weather fact and a description into a city record.
    #[must_use]
    pub fn new(weather: Weather, description: String) -> Self {
        Self {
            description,
            temperature: format_temperature(weather.temperature),
            weather_situation: weather.summary,
        }
    }
}

/// Render a temperature with one fractional digit (`44` becomes `"44.0"`).
#[must_use]
pub fn format_temperature(temperature: f64) -> String {
    format!("{temperature:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_has_one_fractional_digit() {
        assert_eq!(format_temperature(44.4), "44.4");
        assert_eq!(format_temperature(44.0), "44.0");
        assert_eq!(format_temperature(-3.24), "-3.2");
        assert_eq!(format_temperature(12.96), "13.0");
    }

    #[test]
    fn city_info_takes_fields_from_both_facts() {
        let info = CityInfo::new(Weather::new(21.0, "clear sky"), "A city.".to_owned());

        assert_eq!(info.description, "A city.");
        assert_eq!(info.weather_situation, "clear sky");
        assert_eq!(info.temperature, "21.0");
    }

    #[test]
    fn city_info_serializes_with_transport_field_names() {
        let info = CityInfo::new(Weather::new(44.4, "hot and sandy"), "Mos Eisley".to_owned());

        let json = serde_json::to_string(&info).expect("serialize city info");

        assert_eq!(
            json,
            r#"{"description":"Mos Eisley","weather_situation":"hot and sandy","temperature":"44.4"}"#
        );
    }
}
