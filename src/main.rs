mod appsettings;
mod storage;
mod telegram;
mod user;
mod weather;

use std::sync::Arc;

use appsettings::AppSettings;
use storage::UserStorage;
use storage::sqlite::user_storage::SqliteUserStorage;
use telegram::{Command, TelegramInteractionInterface};
use teloxide::{prelude::*, utils::command::BotCommands};
use weather::{OpenWeatherMapClient, WeatherProvider};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_logging();

    if let Err(e) = run().await {
        log::error!("Failed to start: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();
}

async fn run() -> anyhow::Result<()> {
    let settings = AppSettings::load()?;
    log::info!("Settings loaded.");

    let pool = storage::sqlite::connect(&settings.database.url).await?;
    let user_storage: Arc<dyn UserStorage> = Arc::new(SqliteUserStorage::new(pool));
    let weather: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherMapClient::new(settings.weather));

    let bot = Bot::new(settings.telegram.token);
    bot.set_my_commands(Command::bot_commands()).await?;
    log::info!("Bot commands registered.");

    TelegramInteractionInterface::start(bot, user_storage, weather).await;
    Ok(())
}
