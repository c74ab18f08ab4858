use crate::{model::WeatherSnapshot, session::ViewState};

/// Shown for every failed fetch, whatever the underlying cause.
pub const FETCH_FAILED_MESSAGE: &str = "City not found. Please enter a valid city name.";

/// Shown when nothing has ever been fetched and nothing is in flight.
pub const NO_DATA_MESSAGE: &str = "No weather data available";

/// Shown while a fetch is outstanding.
pub const LOADING_MESSAGE: &str = "Fetching weather...";

/// Render the result area for the given state.
pub fn render(view: &ViewState<'_>) -> String {
    match view {
        ViewState::Loading => LOADING_MESSAGE.to_string(),
        ViewState::Populated(snapshot) => render_card(snapshot),
        ViewState::Empty => NO_DATA_MESSAGE.to_string(),
    }
}

/// The populated weather card, one field per line.
///
/// Dates and clock times are rendered in the observed location's own UTC
/// offset, day/month/year and 12-hour clock.
pub fn render_card(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{name}\n\
         {date}\n\
         {condition}  ({icon_url})\n\
         {temp:.1}°C\n\
         Feels Like: {feels_like:.1}°C\n\
         Wind: {wind:.1} m/s\n\
         Humidity: {humidity}%\n\
         Air Pressure: {pressure} hPa\n\
         Sunrise: {sunrise}\n\
         Sunset: {sunset}",
        name = snapshot.location_name,
        date = snapshot.observed_at.format("%-d/%-m/%Y"),
        condition = snapshot.condition,
        icon_url = snapshot.icon_url(),
        temp = snapshot.temperature_c,
        feels_like = snapshot.feels_like_c,
        wind = snapshot.wind_speed_mps,
        humidity = snapshot.humidity_pct,
        pressure = snapshot.pressure_hpa,
        sunrise = snapshot.sunrise.format("%-I:%M:%S %P"),
        sunset = snapshot.sunset.format("%-I:%M:%S %P"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn iligan_snapshot() -> WeatherSnapshot {
        let offset = FixedOffset::east_opt(8 * 3600).expect("valid offset");
        let at = |ts: i64| {
            Utc.timestamp_opt(ts, 0)
                .single()
                .expect("valid timestamp")
                .with_timezone(&offset)
        };

        WeatherSnapshot {
            location_name: "Iligan City".to_string(),
            observed_at: at(1_700_000_000),
            temperature_c: 29.5,
            feels_like_c: 32.1,
            humidity_pct: 74,
            pressure_hpa: 1009,
            wind_speed_mps: 2.1,
            condition: "clear sky".to_string(),
            icon: "01d".to_string(),
            sunrise: at(1_699_999_000),
            sunset: at(1_700_040_000),
        }
    }

    #[test]
    fn card_shows_every_snapshot_field() {
        let card = render_card(&iligan_snapshot());

        assert!(card.contains("Iligan City"));
        assert!(card.contains("15/11/2023"));
        assert!(card.contains("clear sky"));
        assert!(card.contains("https://openweathermap.org/img/wn/01d.png"));
        assert!(card.contains("29.5°C"));
        assert!(card.contains("Feels Like: 32.1°C"));
        assert!(card.contains("Wind: 2.1 m/s"));
        assert!(card.contains("Humidity: 74%"));
        assert!(card.contains("Air Pressure: 1009 hPa"));
        assert!(card.contains("Sunrise: 5:56:40 am"));
        assert!(card.contains("Sunset: 5:20:00 pm"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let snapshot = iligan_snapshot();
        assert_eq!(render_card(&snapshot), render_card(&snapshot));
    }

    #[test]
    fn render_covers_all_three_states() {
        let snapshot = iligan_snapshot();

        assert_eq!(render(&ViewState::Loading), LOADING_MESSAGE);
        assert_eq!(render(&ViewState::Empty), NO_DATA_MESSAGE);
        assert!(render(&ViewState::Populated(&snapshot)).contains("Iligan City"));
    }

    #[test]
    fn failure_message_matches_the_product_wording() {
        assert_eq!(
            FETCH_FAILED_MESSAGE,
            "City not found. Please enter a valid city name."
        );
    }
}
