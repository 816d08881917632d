mod client;
mod model;

pub use client::OpenWeatherMapClient;
pub use model::{ForecastSeries, WeatherAlert, WeatherSnapshot};
#[cfg(test)]
pub use model::ForecastEntry;

use async_trait::async_trait;

/// Read-only source of weather data for a free-text city name.
///
/// Every failure, be it transport, an unknown city or an unexpected body, is reported as `None`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Option<WeatherSnapshot>;

    /// Returns the whole series the provider sent, callers pick how many entries to show.
    async fn forecast(&self, city: &str) -> Option<ForecastSeries>;
}
