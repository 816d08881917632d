use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::appsettings::WeatherSettings;

use super::WeatherProvider;
use super::model::{CurrentWeatherResponse, ForecastResponse, ForecastSeries, WeatherSnapshot};

#[derive(Debug, Error)]
pub enum WeatherClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("provider responded with status {0}")]
    Status(StatusCode),

    #[error("provider response is malformed: {0}")]
    Malformed(String),
}

/// OpenWeatherMap client for the `/weather` and `/forecast` endpoints.
pub struct OpenWeatherMapClient {
    client: Client,
    settings: WeatherSettings,
}

impl OpenWeatherMapClient {
    pub fn new(settings: WeatherSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherClientError> {
        let url = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.settings.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.settings.language.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(WeatherClientError::Status(response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherClientError::Malformed(e.to_string()))
    }

    pub async fn try_current(&self, city: &str) -> Result<WeatherSnapshot, WeatherClientError> {
        let response: CurrentWeatherResponse = self.make_request("weather", city).await?;
        WeatherSnapshot::try_from(response).map_err(WeatherClientError::Malformed)
    }

    pub async fn try_forecast(&self, city: &str) -> Result<ForecastSeries, WeatherClientError> {
        let response: ForecastResponse = self.make_request("forecast", city).await?;
        ForecastSeries::try_from(response).map_err(WeatherClientError::Malformed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn current(&self, city: &str) -> Option<WeatherSnapshot> {
        self.try_current(city)
            .await
            .inspect_err(|e| log::warn!("Current weather for {city:?} is unavailable: {e}"))
            .ok()
    }

    async fn forecast(&self, city: &str) -> Option<ForecastSeries> {
        self.try_forecast(city)
            .await
            .inspect_err(|e| log::warn!("Forecast for {city:?} is unavailable: {e}"))
            .ok()
    }
}
