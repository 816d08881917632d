use teloxide::types::Message;

use crate::user::TgUserId;

/// Telegram id of the user who sent the message being handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sender(pub TgUserId);

pub fn sender(msg: Message) -> Option<Sender> {
    match msg.from.as_ref() {
        Some(user) => Some(Sender(user.id.0 as TgUserId)),
        None => {
            log::warn!("Ignoring message {:?} without a sender", msg.id);
            None
        }
    }
}
