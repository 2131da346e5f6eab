use serde::{Deserialize, Serialize};

/// One coarse/fine condition pair from the provider's `weather` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

/// Current conditions for one city, as returned by the provider (imperial units).
///
/// Sub-documents are optional. Readings from a missing `main` or `wind`
/// block read as 0; a missing or empty `weather` array means the
/// observation has no condition at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Option<Vec<Condition>>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub wind: Option<Wind>,
}

impl WeatherObservation {
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.as_ref().and_then(|w| w.first())
    }

    /// Temperature in °F.
    pub fn temperature(&self) -> f64 {
        self.main.as_ref().map_or(0.0, |m| m.temp)
    }

    pub fn feels_like(&self) -> f64 {
        self.main.as_ref().map_or(0.0, |m| m.feels_like)
    }

    pub fn humidity(&self) -> f64 {
        self.main.as_ref().map_or(0.0, |m| m.humidity)
    }

    /// Wind speed in mph.
    pub fn wind_speed(&self) -> f64 {
        self.wind.as_ref().map_or(0.0, |w| w.speed)
    }

    pub fn icon_key(&self) -> &'static str {
        let main = self
            .primary_condition()
            .map(|c| c.main.to_lowercase())
            .unwrap_or_default();

        match main.as_str() {
            "clear" => "clear",
            "clouds" => "clouds",
            "rain" => "rain",
            "snow" => "snow",
            "thunderstorm" => "thunderstorm",
            _ => "default",
        }
    }

    pub fn icon_glyph(&self) -> &'static str {
        match self.icon_key() {
            "clear" => "☀️",
            "clouds" => "☁️",
            "rain" => "🌧️",
            "snow" => "❄️",
            "thunderstorm" => "⛈️",
            _ => "🌡️",
        }
    }
}
