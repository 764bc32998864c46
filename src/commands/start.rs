use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::{ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Start command received from Telegram ID: {}", telegram_id);

        let newly_registered = services.sessions().register(telegram_id);
        if newly_registered {
            bot.send_message(
                chat_id,
                "<b>Welcome to the Casino Roulette!</b>\n\
                Pick a token, enter an amount and spin the wheel — \
                whatever it lands on is what you get back.",
            )
            .parse_mode(ParseMode::Html)
            .await?;
        } else {
            bot.send_message(chat_id, "<b>Welcome back to the Casino Roulette!</b>")
                .parse_mode(ParseMode::Html)
                .await?;
        }

        if let Some(dialogue) = dialogue {
            dialogue.update(State::Start).await?;
        }

        bot.send_message(chat_id, "What would you like to do?")
            .reply_markup(ui::wheel_menu_keyboard())
            .await?;

        Ok(())
    }
}
