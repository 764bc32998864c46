//! Casino Roulette Bot for Telegram - Main executable
//!
//! This is the entry point for the Telegram bot that lets users pick a
//! token, enter an amount and spin an animated roulette wheel. The wheel
//! picks a uniformly random destination token and presents a playful "swap
//! result" — no real swap, quote or chain transaction ever happens.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use roulette_swap_bot::{Router, WheelConfig};
use std::env;
use teloxide::{dptree, Bot};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Casino Roulette Telegram Bot v{}",
        roulette_swap_bot::VERSION
    );

    // Load and validate environment variables
    let bot_token = env::var("TELEGRAM_BOT_TOKEN")
        .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

    // Wheel configuration (spin timing, catalog, optional fixed seed)
    let config = WheelConfig::from_env().context("Invalid wheel configuration")?;
    info!(
        "Wheel ready: {} tokens, {} ms spin, {} base rotations",
        config.tokens.len(),
        config.spin_duration_ms,
        config.base_full_spins
    );

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    // Initialize the application components
    info!("Initializing bot application...");
    let (router, service_container, storage) = roulette_swap_bot::create_application(config);

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service_container, storage])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
