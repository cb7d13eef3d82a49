use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One weather observation as reported by the data service.
///
/// Every field is optional in the source document; missing ones keep their
/// `Default` value (empty string, zero, Unix epoch).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metar {
    pub raw_text: String,
    pub station_id: String,
    pub observation_time: DateTime<Utc>,
    #[serde(rename = "temp_c", deserialize_with = "lenient_number")]
    pub temperature_c: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub dewpoint_c: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub wind_dir_degrees: i32,
    #[serde(deserialize_with = "lenient_number")]
    pub wind_speed_kt: i32,
    #[serde(deserialize_with = "lenient_number")]
    pub visibility_statute_mi: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub altim_in_hg: f64,
    #[serde(rename = "wx_string")]
    pub weather: String,
    pub flight_category: FlightCategory,
    #[serde(rename = "sky_condition")]
    pub sky_conditions: Vec<SkyCondition>,
}

/// A single reported cloud layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyCondition {
    #[serde(rename = "@sky_cover")]
    pub cover: String,
    #[serde(rename = "@cloud_base_ft_agl", deserialize_with = "lenient_number")]
    pub base_ft_agl: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FlightCategory {
    Vfr,
    Mvfr,
    Ifr,
    Lifr,
    /// Anything the service sends that is not one of the four categories,
    /// including an empty or missing value. The label is kept verbatim.
    Unknown(String),
}

impl FlightCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FlightCategory::Vfr => "VFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Lifr => "LIFR",
            FlightCategory::Unknown(label) => label,
        }
    }
}

impl Default for FlightCategory {
    fn default() -> Self {
        FlightCategory::Unknown(String::new())
    }
}

impl From<String> for FlightCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VFR" => FlightCategory::Vfr,
            "MVFR" => FlightCategory::Mvfr,
            "IFR" => FlightCategory::Ifr,
            "LIFR" => FlightCategory::Lifr,
            _ => FlightCategory::Unknown(value),
        }
    }
}

impl From<&str> for FlightCategory {
    fn from(value: &str) -> Self {
        FlightCategory::from(value.to_string())
    }
}

impl std::fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Numeric fields sometimes carry text such as `VRB` wind or `10+` visibility.
/// A trailing `+` is dropped; anything else unparsable becomes zero.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let text = String::deserialize(deserializer)?;
    Ok(text.trim().trim_end_matches('+').parse().unwrap_or_default())
}

/// Order reports by their raw text. The raw text starts with the station id,
/// so this groups output by station. Stable: equal texts keep their order.
pub fn sort_by_raw_text(metars: &mut [Metar]) {
    metars.sort_by(|a, b| a.raw_text.cmp(&b.raw_text));
}
