use crate::model::WeatherObservation;

/// Capitalize the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Human-readable summary of current conditions, temperatures rounded to whole °F
/// (halves to even).
pub fn format_observation(city: &str, obs: &WeatherObservation) -> String {
    let description = obs.primary_condition().map(|c| c.description.as_str()).unwrap_or_default();

    format!(
        "{}\n{}\n{}°F (feels like {}°F)\nHumidity: {}%",
        title_case(city),
        title_case(description),
        obs.temperature().round_ties_even() as i64,
        obs.feels_like().round_ties_even() as i64,
        obs.humidity().round_ties_even() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("overcast CLOUDS"), "Overcast Clouds");
        assert_eq!(title_case("  são   paulo "), "São Paulo");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn formats_report() {
        let obs: WeatherObservation = serde_json::from_str(
            r#"{"weather":[{"main":"Rain","description":"light rain"}],
                "main":{"temp":55.6,"feels_like":53.2,"humidity":81}}"#,
        )
        .unwrap();

        assert_eq!(
            format_observation("paris", &obs),
            "Paris\nLight Rain\n56°F (feels like 53°F)\nHumidity: 81%"
        );
    }

    #[test]
    fn halves_round_to_even() {
        let obs: WeatherObservation = serde_json::from_str(
            r#"{"weather":[{"main":"Clear","description":"clear sky"}],
                "main":{"temp":72.5,"feels_like":73.5,"humidity":40}}"#,
        )
        .unwrap();

        assert!(format_observation("rome", &obs).contains("72°F (feels like 74°F)"));
    }
}
