use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAlert {
    pub event: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    /// Offset of the forecast location, used to display local times.
    pub utc_offset: FixedOffset,
    pub entries: Vec<ForecastEntry>,
}

// ============================================================================
// OpenWeatherMap wire format
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct MainReadings {
    pub temp: f64,
    pub feels_like: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Condition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AlertPayload {
    pub event: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherResponse {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub alerts: Vec<AlertPayload>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastItem {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastCity {
    pub timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    pub city: Option<ForecastCity>,
}

fn first_description(conditions: Vec<Condition>) -> Result<String, String> {
    conditions
        .into_iter()
        .next()
        .map(|condition| condition.description)
        .ok_or_else(|| "weather conditions are empty".to_string())
}

impl TryFrom<CurrentWeatherResponse> for WeatherSnapshot {
    type Error = String;

    fn try_from(value: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let feels_like = value
            .main
            .feels_like
            .ok_or_else(|| "main.feels_like is missing".to_string())?;

        Ok(Self {
            temperature: value.main.temp,
            feels_like,
            description: first_description(value.weather)?,
            // Alerts without an event name are skipped, they never fail the snapshot.
            alerts: value
                .alerts
                .into_iter()
                .filter_map(|alert| {
                    Some(WeatherAlert {
                        event: alert.event.filter(|event| !event.is_empty())?,
                        description: alert.description,
                    })
                })
                .collect(),
        })
    }
}

impl TryFrom<ForecastItem> for ForecastEntry {
    type Error = String;

    fn try_from(value: ForecastItem) -> Result<Self, Self::Error> {
        let time = DateTime::from_timestamp(value.dt, 0)
            .ok_or_else(|| format!("timestamp {} is out of range", value.dt))?;

        Ok(Self {
            time,
            temperature: value.main.temp,
            description: first_description(value.weather)?,
        })
    }
}

impl TryFrom<ForecastResponse> for ForecastSeries {
    type Error = String;

    fn try_from(value: ForecastResponse) -> Result<Self, Self::Error> {
        let utc_offset = value
            .city
            .and_then(|city| city.timezone)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());

        let entries = value
            .list
            .into_iter()
            .map(ForecastEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            utc_offset,
            entries,
        })
    }
}
