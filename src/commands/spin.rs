use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{BotError, State};
use crate::utils;

pub struct SpinCommand;

impl CommandHandler for SpinCommand {
    fn command_name() -> &'static str {
        "spin"
    }

    fn description() -> &'static str {
        "spin the wheel to swap a token"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        if !services.sessions().is_registered(telegram_id) {
            bot.send_message(chat_id, BotError::SessionNotStarted.to_string())
                .await?;
            return Ok(());
        }

        info!("Spin command received from Telegram ID: {}", telegram_id);

        bot.send_message(chat_id, "Choose the token to swap from:")
            .reply_markup(ui::token_select_keyboard(&services.config().tokens))
            .await?;

        Ok(())
    }
}

/// Dialogue step: the user has chosen a source token and now typed an amount
pub async fn receive_spin_amount(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    _services: Arc<ServiceContainer>,
) -> Result<()> {
    let State::AwaitingSpinAmount { token } = state else {
        return Ok(());
    };

    let text = msg.text().unwrap_or("");
    match utils::parse_spin_amount(text) {
        Ok(amount) => {
            dialogue
                .update(State::ReadyToSpin {
                    token: token.clone(),
                    amount: amount.clone(),
                })
                .await?;

            bot.send_message(
                msg.chat.id,
                format!("{} {} on the wheel. Ready when you are!", amount, token),
            )
            .reply_markup(ui::spin_keyboard())
            .await?;
        }
        Err(e) => {
            // stay in AwaitingSpinAmount and let the user retry
            bot.send_message(msg.chat.id, format!("❌ {}. Enter a positive amount:", e))
                .await?;
        }
    }

    Ok(())
}
