use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::Dialogue, dispatching::dialogue::InMemStorage,
    dispatching::UpdateHandler, prelude::*,
};

use crate::commands::{self, callback::handle_callback, BotCommands, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::State;

type MyDialogue = Dialogue<State, InMemStorage<State>>;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let services_start = self.services.clone();
        let services_spin = self.services.clone();
        let services_tokens = self.services.clone();
        let services_help = self.services.clone();
        let services_for_callbacks = self.services.clone();
        let services_for_amount = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services_local = services_start.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::start::StartCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services_local,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Spin].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services_local = services_spin.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::spin::SpinCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services_local,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Tokens].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services_local = services_tokens.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::tokens::TokensCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services_local,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Help].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services_local = services_help.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::help::HelpCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services_local,
                        )
                        .await
                    }
                },
            ));

        let message_handler = Update::filter_message().branch(command_handler).branch(
            dptree::entry().branch(case![State::AwaitingSpinAmount { token }].endpoint(
                move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                    let services = services_for_amount.clone();
                    async move {
                        commands::spin::receive_spin_amount(bot, msg, state, dialogue, services)
                            .await
                    }
                },
            )),
        );

        // Add callback query handler for our buttons
        let callback_handler = Update::filter_callback_query().endpoint(
            move |bot: Bot, q: CallbackQuery, dialogue: MyDialogue| {
                let services = services_for_callbacks.clone();
                async move { handle_callback(bot, q, dialogue, services).await }
            },
        );

        teloxide::dispatching::dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
