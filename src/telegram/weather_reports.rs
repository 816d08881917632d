use teloxide::dptree::case;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use super::util::Sender;
use super::{Command, HandlerResult, UserStorageHandle, WeatherProviderHandle, messages};

async fn stored_city(
    storage: &UserStorageHandle,
    sender: Sender,
) -> anyhow::Result<Option<String>> {
    let user = storage.find(sender.0).await?;
    Ok(user.and_then(|user| user.city().map(str::to_string)))
}

async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, messages::GREETING).await?;
    Ok(())
}

async fn current_weather(
    bot: Bot,
    msg: Message,
    sender: Sender,
    storage: UserStorageHandle,
    weather: WeatherProviderHandle,
) -> HandlerResult {
    log::info!("Current weather requested by {}", sender.0);

    let reply = match stored_city(&storage, sender).await? {
        None => messages::SET_CITY_FIRST.to_string(),
        Some(city) => match weather.current(&city).await {
            Some(snapshot) => messages::current_weather(&city, &snapshot),
            None => messages::WEATHER_UNAVAILABLE.to_string(),
        },
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn forecast(
    bot: Bot,
    msg: Message,
    sender: Sender,
    storage: UserStorageHandle,
    weather: WeatherProviderHandle,
) -> HandlerResult {
    log::info!("Forecast requested by {}", sender.0);

    let reply = match stored_city(&storage, sender).await? {
        None => messages::SET_CITY_FIRST.to_string(),
        Some(city) => match weather.forecast(&city).await {
            Some(series) => messages::forecast(&city, &series),
            None => messages::WEATHER_UNAVAILABLE.to_string(),
        },
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

// Alerts ride on the current-weather response, there is no separate alerts request.
async fn alerts(
    bot: Bot,
    msg: Message,
    sender: Sender,
    storage: UserStorageHandle,
    weather: WeatherProviderHandle,
) -> HandlerResult {
    log::info!("Alerts requested by {}", sender.0);

    let reply = match stored_city(&storage, sender).await? {
        None => messages::SET_CITY_FIRST.to_string(),
        Some(city) => match weather.current(&city).await {
            Some(snapshot) => messages::alerts(&city, &snapshot.alerts),
            None => messages::WEATHER_UNAVAILABLE.to_string(),
        },
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub(super) fn schema() -> UpdateHandler<anyhow::Error> {
    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::CurrentWeather].endpoint(current_weather))
        .branch(case![Command::Forecast].endpoint(forecast))
        .branch(case![Command::Alerts].endpoint(alerts))
}
