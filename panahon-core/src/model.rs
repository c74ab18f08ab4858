use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Current conditions for one location, as reported by the provider.
///
/// A snapshot is immutable: each successful fetch replaces the previous one
/// wholesale, and a failed fetch never touches it. Timestamps carry the UTC
/// offset of the observed location, so sunrise/sunset render as the clock
/// times a person standing there would see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub observed_at: DateTime<FixedOffset>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    /// Short textual condition, e.g. "clear sky".
    pub condition: String,
    /// Opaque icon identifier, e.g. "01d"; only used to build [`Self::icon_url`].
    pub icon: String,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl WeatherSnapshot {
    /// URL of the provider-hosted condition icon.
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}.png", self.icon)
    }
}
