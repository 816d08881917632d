use anyhow::ensure;
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_WEATHER_LANGUAGE: &str = "en";

#[derive(Deserialize, Debug)]
pub struct TelegramSettings {
    pub token: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WeatherSettings {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    pub telegram: TelegramSettings,
    pub weather: WeatherSettings,
    pub database: DatabaseSettings,
}

impl AppSettings {
    /// Reads `appsettings.toml`, the optional `appsettings.local.toml` and `APP__*` variables,
    /// later sources overriding earlier ones.
    pub fn load() -> anyhow::Result<Self> {
        let settings: AppSettings = Config::builder()
            .add_source(File::with_name("appsettings").required(true))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.telegram.token.is_empty(), "telegram.token is not set");
        ensure!(!self.weather.api_key.is_empty(), "weather.api_key is not set");
        ensure!(!self.database.url.is_empty(), "database.url is not set");
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_WEATHER_LANGUAGE.to_string()
}
