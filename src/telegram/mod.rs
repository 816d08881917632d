mod messages;
mod set_location;
mod util;
mod weather_reports;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use teloxide::{
    dispatching::{UpdateHandler, dialogue::InMemStorage},
    error_handlers::LoggingErrorHandler,
    prelude::*,
    utils::command::BotCommands,
};
use util::{Sender, sender};

use crate::storage::UserStorage;
use crate::weather::WeatherProvider;

type GlobalDialogue = Dialogue<GlobalState, InMemStorage<GlobalState>>;
type HandlerResult = anyhow::Result<()>;
type UserStorageHandle = Arc<dyn UserStorage>;
type WeatherProviderHandle = Arc<dyn WeatherProvider>;

/// Per-user conversation step. `WaitingForCity` is consumed by the user's next text message.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
enum GlobalState {
    #[default]
    Idle,
    WaitingForCity,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start working with the bot")]
    Start,
    #[command(description = "get the current weather")]
    CurrentWeather,
    #[command(description = "get the forecast for the next hours")]
    Forecast,
    #[command(description = "set your city")]
    SetLocation,
    #[command(description = "check weather alerts")]
    Alerts,
}

pub struct TelegramInteractionInterface;

impl TelegramInteractionInterface {
    pub async fn start(
        bot: Bot,
        user_storage: UserStorageHandle,
        weather: WeatherProviderHandle,
    ) {
        log::info!("Starting Telegram interaction interface");

        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![
                InMemStorage::<GlobalState>::new(),
                user_storage,
                weather
            ])
            // One update at a time, across all chats.
            .distribution_function(|_| Some(()))
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred while handling an update",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await
    }
}

fn schema() -> UpdateHandler<anyhow::Error> {
    Update::filter_message()
        .filter_map(sender)
        .map(user_dialogue)
        .filter_map_async(user_state)
        .branch(set_location::schema())
        .branch(weather_reports::schema())
        .branch(dptree::endpoint(unknown_message))
}

/// Dialogues are keyed by the sender, so in a group chat every member has their own step.
fn user_dialogue(storage: Arc<InMemStorage<GlobalState>>, sender: Sender) -> GlobalDialogue {
    Dialogue::new(storage, ChatId(sender.0))
}

async fn user_state(dialogue: GlobalDialogue) -> Option<GlobalState> {
    dialogue
        .get_or_default()
        .await
        .inspect_err(|e| log::error!("Unable to read dialogue state: {e:?}"))
        .ok()
}

async fn unknown_message(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        format!(
            "Unable to handle the message.\n\n{}",
            Command::descriptions()
        ),
    )
    .await?;
    Ok(())
}
