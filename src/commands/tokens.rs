use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;

pub struct TokensCommand;

impl CommandHandler for TokensCommand {
    fn command_name() -> &'static str {
        "tokens"
    }

    fn description() -> &'static str {
        "list the tokens on the wheel"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let mut lines = vec!["<b>Tokens on the wheel:</b>".to_string()];
        for token in &services.config().tokens {
            lines.push(format!("• {} — {}", token.symbol, token.name));
        }

        bot.send_message(msg.chat.id, lines.join("\n"))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }
}
