//! Rule-based weather alerts.
//!
//! An observation is checked in three independent groups, always reported
//! in this order:
//! 1. description keywords (first matching rule wins, at most one alert)
//! 2. temperature (heat or freezing, never both)
//! 3. wind speed
//!
//! Two message sets exist: [`AlertProfile::Advisory`] is the full rule set,
//! [`AlertProfile::Brief`] is the short one used by the quick "alerts" action.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::WeatherObservation;

/// A keyword group and the message it produces.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionRule {
    pub keywords: &'static [&'static str],
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct WindRule {
    pub above_mph: f64,
    pub message: fn(f64) -> String,
}

/// Thresholds and message texts for one evaluation profile.
#[derive(Debug, Clone, Copy)]
pub struct AlertRules {
    pub descriptions: &'static [DescriptionRule],
    pub heat_above_f: f64,
    pub heat_message: &'static str,
    pub freeze_below_f: f64,
    pub freeze_message: &'static str,
    pub wind: Option<WindRule>,
    pub no_alerts: &'static str,
    pub unavailable: &'static str,
}

const ADVISORY_DESCRIPTIONS: &[DescriptionRule] = &[
    DescriptionRule { keywords: &["storm", "thunder"], message: "⛈️ Severe Thunderstorm Alert!" },
    DescriptionRule { keywords: &["rain"], message: "🌧️ Rainy – Grab an Umbrella." },
    DescriptionRule { keywords: &["snow"], message: "❄️ Snow – Drive Carefully." },
    DescriptionRule { keywords: &["fog", "mist", "haze"], message: "🌫️ Low Visibility Warning." },
    DescriptionRule { keywords: &["clear"], message: "☀️ Clear Skies – Great Day Ahead!" },
];

const BRIEF_DESCRIPTIONS: &[DescriptionRule] = &[
    DescriptionRule { keywords: &["storm", "thunder"], message: "Storm warning!" },
    DescriptionRule { keywords: &["rain"], message: "Bring umbrella!" },
];

fn wind_advisory(speed: f64) -> String {
    format!("💨 Wind Advisory – {speed} mph gusts!")
}

pub const ADVISORY: AlertRules = AlertRules {
    descriptions: ADVISORY_DESCRIPTIONS,
    heat_above_f: 95.0,
    heat_message: "🔥 Heat Warning – Stay Hydrated!",
    freeze_below_f: 32.0,
    freeze_message: "🥶 Freezing Temps – Bundle Up!",
    wind: Some(WindRule { above_mph: 20.0, message: wind_advisory }),
    no_alerts: "✅ No active weather alerts.",
    unavailable: "⚠️ Unable to check alerts.",
};

pub const BRIEF: AlertRules = AlertRules {
    descriptions: BRIEF_DESCRIPTIONS,
    heat_above_f: 90.0,
    heat_message: "Very hot!",
    freeze_below_f: 32.0,
    freeze_message: "Freezing!",
    wind: None,
    no_alerts: "No alerts",
    unavailable: "Unable to check alerts.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertProfile {
    #[default]
    Advisory,
    Brief,
}

impl AlertProfile {
    pub fn rules(self) -> &'static AlertRules {
        match self {
            AlertProfile::Advisory => &ADVISORY,
            AlertProfile::Brief => &BRIEF,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertProfile::Advisory => "advisory",
            AlertProfile::Brief => "brief",
        }
    }
}

impl fmt::Display for AlertProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered alert lines for one observation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alerts(Vec<String>);

impl Alerts {
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    pub fn render(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for Alerts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Evaluate `obs` against `rules`.
pub fn evaluate(rules: &AlertRules, obs: &WeatherObservation) -> Alerts {
    let Some(condition) = obs.primary_condition() else {
        return Alerts(vec![rules.unavailable.to_string()]);
    };

    let description = condition.description.to_lowercase();
    let temp = obs.temperature();
    let wind = obs.wind_speed();

    let mut alerts = Vec::new();

    if let Some(rule) = rules
        .descriptions
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| description.contains(k)))
    {
        alerts.push(rule.message.to_string());
    }

    if temp > rules.heat_above_f {
        alerts.push(rules.heat_message.to_string());
    } else if temp < rules.freeze_below_f {
        alerts.push(rules.freeze_message.to_string());
    }

    if let Some(rule) = rules.wind {
        if wind > rule.above_mph {
            alerts.push((rule.message)(wind));
        }
    }

    if alerts.is_empty() {
        alerts.push(rules.no_alerts.to_string());
    }

    Alerts(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, MainReadings, Wind};

    fn obs(description: &str, temp: f64, wind: f64) -> WeatherObservation {
        WeatherObservation {
            name: None,
            weather: Some(vec![Condition { main: String::new(), description: description.into() }]),
            main: Some(MainReadings { temp, feels_like: temp, humidity: 50.0 }),
            wind: Some(Wind { speed: wind }),
        }
    }

    fn advisory(o: &WeatherObservation) -> Vec<String> {
        evaluate(&ADVISORY, o).into_lines()
    }

    #[test]
    fn light_rain_scenario() {
        let o: WeatherObservation = serde_json::from_str(
            r#"{"weather":[{"description":"light rain", "main":"Rain"}], "main":{"temp":55}, "wind":{"speed":5}}"#,
        )
        .unwrap();

        assert_eq!(advisory(&o), vec!["🌧️ Rainy – Grab an Umbrella."]);
    }

    #[test]
    fn clear_hot_windy_scenario() {
        let o: WeatherObservation = serde_json::from_str(
            r#"{"weather":[{"description":"clear sky","main":"Clear"}], "main":{"temp":100}, "wind":{"speed":25}}"#,
        )
        .unwrap();

        let lines = advisory(&o);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "☀️ Clear Skies – Great Day Ahead!");
        assert_eq!(lines[1], "🔥 Heat Warning – Stay Hydrated!");
        assert!(lines[2].contains("25"));
        assert_eq!(lines[2], "💨 Wind Advisory – 25 mph gusts!");
    }

    #[test]
    fn missing_weather_is_unavailable() {
        let o: WeatherObservation =
            serde_json::from_str(r#"{"main":{"temp":120},"wind":{"speed":50}}"#).unwrap();
        assert_eq!(advisory(&o), vec!["⚠️ Unable to check alerts."]);
        assert_eq!(evaluate(&BRIEF, &o).into_lines(), vec!["Unable to check alerts."]);
    }

    #[test]
    fn thunder_wins_over_other_keywords() {
        for desc in ["thunderstorm with light rain", "Rain and SNOW, then storm", "thunder fog clear"] {
            let lines = advisory(&obs(desc, 60.0, 0.0));
            assert_eq!(lines, vec!["⛈️ Severe Thunderstorm Alert!"], "description: {desc}");
        }
    }

    #[test]
    fn description_rules_follow_priority() {
        assert_eq!(advisory(&obs("rain and snow", 60.0, 0.0)), vec!["🌧️ Rainy – Grab an Umbrella."]);
        assert_eq!(advisory(&obs("light snow", 40.0, 0.0)), vec!["❄️ Snow – Drive Carefully."]);
        assert_eq!(advisory(&obs("Mist", 60.0, 0.0)), vec!["🌫️ Low Visibility Warning."]);
        assert_eq!(advisory(&obs("haze", 60.0, 0.0)), vec!["🌫️ Low Visibility Warning."]);
        assert_eq!(advisory(&obs("overcast clouds", 60.0, 0.0)), vec!["✅ No active weather alerts."]);
    }

    #[test]
    fn temperature_thresholds_are_strict_and_exclusive() {
        for t in [-40.0, 0.0, 31.9, 32.0, 60.0, 95.0, 95.1, 130.0] {
            let lines = advisory(&obs("overcast clouds", t, 0.0));
            let heat = lines.iter().any(|l| l.contains("Heat Warning"));
            let freeze = lines.iter().any(|l| l.contains("Freezing"));
            assert_eq!(heat, t > 95.0, "temp {t}");
            assert_eq!(freeze, t < 32.0, "temp {t}");
            assert!(!(heat && freeze));
        }
    }

    #[test]
    fn wind_message_carries_speed() {
        for w in [20.5, 21.0, 33.3, 60.0] {
            let lines = advisory(&obs("overcast clouds", 60.0, w));
            assert_eq!(lines.len(), 1);
            assert!(lines[0].contains(&w.to_string()), "wind {w}: {}", lines[0]);
        }
        assert_eq!(advisory(&obs("overcast clouds", 60.0, 20.0)), vec!["✅ No active weather alerts."]);
    }

    #[test]
    fn missing_wind_reads_as_calm() {
        let o: WeatherObservation =
            serde_json::from_str(r#"{"weather":[{"description":"snow","main":"Snow"}],"main":{"temp":20}}"#)
                .unwrap();
        assert_eq!(
            advisory(&o),
            vec!["❄️ Snow – Drive Carefully.", "🥶 Freezing Temps – Bundle Up!"]
        );
    }

    #[test]
    fn missing_main_reads_as_freezing() {
        let o: WeatherObservation =
            serde_json::from_str(r#"{"weather":[{"description":"clear sky","main":"Clear"}]}"#).unwrap();
        assert_eq!(
            advisory(&o),
            vec!["☀️ Clear Skies – Great Day Ahead!", "🥶 Freezing Temps – Bundle Up!"]
        );
    }

    #[test]
    fn evaluation_is_repeatable() {
        let o = obs("heavy thunderstorm", 101.0, 30.0);
        assert_eq!(evaluate(&ADVISORY, &o), evaluate(&ADVISORY, &o));
    }

    #[test]
    fn brief_profile_uses_short_messages() {
        let rules = AlertProfile::Brief.rules();
        assert_eq!(evaluate(rules, &obs("storm", 92.0, 40.0)).render(), "Storm warning!\nVery hot!");
        assert_eq!(evaluate(rules, &obs("drizzle and rain", 20.0, 0.0)).render(), "Bring umbrella!\nFreezing!");
        assert_eq!(evaluate(rules, &obs("light snow", 50.0, 40.0)).render(), "No alerts");
    }

    #[test]
    fn profile_names() {
        assert_eq!(AlertProfile::default(), AlertProfile::Advisory);
        assert_eq!(AlertProfile::Brief.to_string(), "brief");
    }
}
