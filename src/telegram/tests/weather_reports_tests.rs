use sqlx::{Pool, Sqlite};
use teloxide_tests::MockMessageText;

use crate::storage::UserStorage;
use crate::telegram::messages;
use crate::telegram::tests::test_utils::*;

#[sqlx::test(migrations = "./migrations")]
async fn start_should_send_greeting(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::failing();
    let mut bot = bot(MockMessageText::new().text("/start"), storage, weather.clone());

    bot.dispatch_and_check_last_text(messages::GREETING).await;

    assert!(weather.requests().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn given_no_city_current_weather_should_ask_to_set_city_without_fetching(
    pool: Pool<Sqlite>,
) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_current(snapshot(10.0, 8.0, "cloudy"));
    let mut bot = bot(
        MockMessageText::new().text("/current_weather"),
        storage,
        weather.clone(),
    );

    bot.dispatch_and_check_last_text(messages::SET_CITY_FIRST)
        .await;

    assert!(weather.requests().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn given_city_current_weather_should_report_readings(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_current(snapshot(10.0, 8.0, "cloudy"));
    let message = MockMessageText::new().text("/current_weather");
    storage.upsert(tg_user_id(&message), "London").await.unwrap();
    let mut bot = bot(message, storage, weather.clone());

    bot.dispatch().await;

    let reply = last_reply(&bot);
    assert!(reply.contains("London"));
    assert!(reply.contains("10"));
    assert!(reply.contains("8"));
    assert!(reply.contains("cloudy"));
    assert_eq!(weather.requests(), vec!["London".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn given_provider_failure_current_weather_should_report_unavailable(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::failing();
    let message = MockMessageText::new().text("/current_weather");
    storage.upsert(tg_user_id(&message), "London").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch_and_check_last_text(messages::WEATHER_UNAVAILABLE)
        .await;
}

#[sqlx::test(migrations = "./migrations")]
async fn given_long_series_forecast_should_show_first_five_entries(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_forecast(series(40));
    let message = MockMessageText::new().text("/forecast");
    storage.upsert(tg_user_id(&message), "London").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch().await;

    let reply = last_reply(&bot);
    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Weather forecast for London:");
    assert_eq!(lines[1], "14-11 22:13: 0°C, light rain");
    assert_eq!(lines[5], "15-11 10:13: 4°C, light rain");
}

#[sqlx::test(migrations = "./migrations")]
async fn given_provider_failure_forecast_should_report_unavailable(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::failing();
    let message = MockMessageText::new().text("/forecast");
    storage.upsert(tg_user_id(&message), "London").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch_and_check_last_text(messages::WEATHER_UNAVAILABLE)
        .await;
}

#[sqlx::test(migrations = "./migrations")]
async fn given_no_city_forecast_should_ask_to_set_city(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_forecast(series(3));
    let mut bot = bot(MockMessageText::new().text("/forecast"), storage, weather.clone());

    bot.dispatch_and_check_last_text(messages::SET_CITY_FIRST)
        .await;

    assert!(weather.requests().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn given_active_alerts_should_list_them(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let mut current = snapshot(30.0, 33.0, "clear sky");
    current.alerts = vec![alert("Heat", "Avoid the sun"), alert("Smog", "Stay indoors")];
    let weather = StubWeatherProvider::with_current(current);
    let message = MockMessageText::new().text("/alerts");
    storage.upsert(tg_user_id(&message), "Madrid").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch_and_check_last_text(
        "Weather alerts for Madrid:\nHeat: Avoid the sun\nSmog: Stay indoors",
    )
    .await;
}

#[sqlx::test(migrations = "./migrations")]
async fn given_no_alerts_should_report_none(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_current(snapshot(12.0, 11.0, "mist"));
    let message = MockMessageText::new().text("/alerts");
    storage.upsert(tg_user_id(&message), "Madrid").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch_and_check_last_text(messages::NO_ALERTS).await;
}

#[sqlx::test(migrations = "./migrations")]
async fn given_provider_failure_alerts_should_report_unavailable(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::failing();
    let message = MockMessageText::new().text("/alerts");
    storage.upsert(tg_user_id(&message), "Madrid").await.unwrap();
    let mut bot = bot(message, storage, weather);

    bot.dispatch_and_check_last_text(messages::WEATHER_UNAVAILABLE)
        .await;
}

#[sqlx::test(migrations = "./migrations")]
async fn given_unknown_text_should_list_commands(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::failing();
    let mut bot = bot(MockMessageText::new().text("hello"), storage, weather);

    bot.dispatch().await;

    let reply = last_reply(&bot);
    assert!(reply.starts_with("Unable to handle the message."));
    assert!(reply.contains("/current_weather"));
    assert!(reply.contains("/set_location"));
}

#[sqlx::test(migrations = "./migrations")]
async fn given_no_city_alerts_should_ask_to_set_city_without_fetching(pool: Pool<Sqlite>) {
    let storage = CountingUserStorage::new(pool);
    let weather = StubWeatherProvider::with_current(snapshot(12.0, 11.0, "mist"));
    let mut bot = bot(MockMessageText::new().text("/alerts"), storage, weather.clone());

    bot.dispatch_and_check_last_text(messages::SET_CITY_FIRST)
        .await;

    assert!(weather.requests().is_empty());
}
