use teloxide::dptree::case;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use super::util::Sender;
use super::{
    Command, GlobalDialogue, GlobalState, HandlerResult, UserStorageHandle, WeatherProviderHandle,
    messages,
};

async fn ask_for_city(bot: Bot, dialogue: GlobalDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, messages::CITY_PROMPT).await?;
    dialogue.update(GlobalState::WaitingForCity).await?;
    Ok(())
}

/// Consumes the pending city request. The city is only stored if the provider knows it.
async fn receive_city(
    bot: Bot,
    dialogue: GlobalDialogue,
    msg: Message,
    sender: Sender,
    storage: UserStorageHandle,
    weather: WeatherProviderHandle,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, messages::CITY_AS_TEXT).await?;
        return Ok(());
    };

    dialogue.exit().await?;

    let city = text.trim();
    if city.is_empty() || weather.current(city).await.is_none() {
        log::info!("Rejected city {:?} from {}", city, sender.0);
        bot.send_message(msg.chat.id, messages::CITY_NOT_FOUND).await?;
        return Ok(());
    }

    storage.upsert(sender.0, city).await?;
    bot.send_message(msg.chat.id, messages::city_saved(city))
        .await?;

    Ok(())
}

pub(super) fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(case![GlobalState::WaitingForCity].endpoint(receive_city))
        .branch(
            teloxide::filter_command::<Command, _>()
                .branch(case![Command::SetLocation].endpoint(ask_for_city)),
        )
}
