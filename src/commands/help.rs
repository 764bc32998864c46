use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{register_commands, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _telegram_id: i64,
        _dialogue: Option<MyDialogue>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let mut lines = vec!["Available commands:".to_string()];
        for (name, description) in register_commands() {
            lines.push(format!("/{} - {}", name, description));
        }
        lines.push(String::new());
        lines.push(
            "The wheel is pure luck: you always receive the amount you put in, \
            in whichever token the wheel lands on."
                .to_string(),
        );

        bot.send_message(msg.chat.id, lines.join("\n")).await?;

        Ok(())
    }
}
