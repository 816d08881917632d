use crate::weather::{ForecastSeries, WeatherAlert, WeatherSnapshot};

/// Forecast entries shown to the user, the provider sends many more.
pub const FORECAST_ENTRIES: usize = 5;

pub const GREETING: &str =
    "Hi! I'm WeatherNow, a bot that tells you about the weather. Use /set_location to choose your city.";
pub const SET_CITY_FIRST: &str = "Set your city first with /set_location.";
pub const WEATHER_UNAVAILABLE: &str = "Could not get weather data.";
pub const NO_ALERTS: &str = "There are no weather alerts right now.";
pub const CITY_PROMPT: &str = "Enter the name of your city:";
pub const CITY_NOT_FOUND: &str = "Could not find that city. Please try again with /set_location.";
pub const CITY_AS_TEXT: &str = "Please send the name of your city as a text message.";

pub fn city_saved(city: &str) -> String {
    format!("Your city is set to {city}.")
}

pub fn current_weather(city: &str, snapshot: &WeatherSnapshot) -> String {
    format!(
        "Weather in {city}:\nTemperature: {}°C\nFeels like: {}°C\nConditions: {}",
        snapshot.temperature, snapshot.feels_like, snapshot.description
    )
}

pub fn forecast(city: &str, series: &ForecastSeries) -> String {
    let mut output = format!("Weather forecast for {city}:");
    for entry in series.entries.iter().take(FORECAST_ENTRIES) {
        let local_time = entry.time.with_timezone(&series.utc_offset);
        output.push_str(&format!(
            "\n{}: {}°C, {}",
            local_time.format("%d-%m %H:%M"),
            entry.temperature,
            entry.description
        ));
    }
    output
}

pub fn alerts(city: &str, alerts: &[WeatherAlert]) -> String {
    if alerts.is_empty() {
        return NO_ALERTS.to_string();
    }

    let mut output = format!("Weather alerts for {city}:");
    for alert in alerts {
        output.push_str(&format!("\n{}: {}", alert.event, alert.description));
    }
    output
}
