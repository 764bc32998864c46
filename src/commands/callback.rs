use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{help, spin, start, tokens, ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{BotError, State};
use crate::interactor::spin_interactor::SpinInteractorImpl;
use crate::presenter::spin_presenter::{SpinPresenter, SpinPresenterImpl};
use crate::view::spin_view::TelegramSpinView;

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.clone().data {
        Some(data) => data,
        None => return Ok(()),
    };

    let message = match q.regular_message() {
        Some(message) => message.clone(),
        None => return Ok(()),
    };

    let chat_id = message.chat.id;
    let telegram_id = q.from.id.0 as i64;

    info!(
        "Received callback: {} from user {}",
        callback_data, telegram_id
    );

    // Acknowledge the callback query to stop the loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    if callback_data == "menu" {
        bot.send_message(chat_id, "What would you like to do?")
            .reply_markup(ui::wheel_menu_keyboard())
            .await?;
    } else if callback_data == "spin" {
        spin::SpinCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if let Some(symbol) = callback_data.strip_prefix("spin_token_") {
        handle_token_selection(&bot, symbol, chat_id, dialogue, services).await?;
    } else if callback_data == "spin_go" {
        handle_spin_go(bot, chat_id, dialogue, services).await?;
    } else if callback_data == "spin_close" {
        // Dismiss the result panel: drop the Close button, offer the menu again
        bot.edit_message_reply_markup(chat_id, message.id).await?;
        bot.send_message(chat_id, "Fancy another spin?")
            .reply_markup(ui::wheel_menu_keyboard())
            .await?;
    } else if callback_data == "tokens" {
        tokens::TokensCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if callback_data == "help" {
        help::HelpCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if callback_data == "start" {
        start::StartCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    }

    Ok(())
}

async fn handle_token_selection(
    bot: &Bot,
    symbol: &str,
    chat_id: ChatId,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let Some(token) = services.config().find_token(symbol).cloned() else {
        bot.send_message(chat_id, format!("Unknown token: {}", symbol))
            .await?;
        return Ok(());
    };

    dialogue
        .update(State::AwaitingSpinAmount {
            token: token.symbol.clone(),
        })
        .await?;

    bot.send_message(
        chat_id,
        format!("Enter the amount of {} to put on the wheel:", token.symbol),
    )
    .await?;

    Ok(())
}

async fn handle_spin_go(
    bot: Bot,
    chat_id: ChatId,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let state = dialogue.get().await?.unwrap_or_default();
    let State::ReadyToSpin { token, amount } = state else {
        bot.send_message(
            chat_id,
            "Pick a token and enter an amount first — try /spin.",
        )
        .await?;
        return Ok(());
    };

    // One spin per chat: a second trigger while the wheel turns is ignored
    let active_spins = services.active_spins();
    if !active_spins.try_begin(chat_id.0) {
        bot.send_message(chat_id, format!("⏳ {}.", BotError::SpinInProgress))
            .await?;
        return Ok(());
    }

    let interactor = Arc::new(SpinInteractorImpl::new(
        services.config().clone(),
        services.rng(),
    ));
    let view = Arc::new(TelegramSpinView::new(bot, chat_id));
    let presenter = SpinPresenterImpl::new(interactor, view);
    let spin_result = presenter.spin(&token, &amount).await;

    // release the gate and reset the dialogue even if the spin errored
    active_spins.finish(chat_id.0);
    dialogue.update(State::Start).await?;

    spin_result
}
