use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

use crate::commands::ui;
use crate::engine::SpinFrame;
use crate::entity::{SwapResult, Token};
use crate::utils::progress_bar;

#[async_trait]
pub trait SpinView: Send + Sync {
    /// Post the wheel message that the animation frames will edit
    async fn display_wheel_start(
        &self,
        source: &Token,
        amount: &str,
        catalog: &[Token],
    ) -> Result<Option<Message>>;

    /// Redraw the wheel for one animation frame
    async fn display_frame(
        &self,
        source: &Token,
        amount: &str,
        catalog: &[Token],
        frame: &SpinFrame,
        message: &Option<Message>,
    ) -> Result<()>;

    /// Replace the wheel with the swap result panel
    async fn display_result(&self, result: &SwapResult, message: Option<Message>) -> Result<()>;

    async fn display_validation_error(&self, error_message: String) -> Result<()>;
}

pub struct TelegramSpinView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSpinView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SpinView for TelegramSpinView {
    async fn display_wheel_start(
        &self,
        source: &Token,
        amount: &str,
        catalog: &[Token],
    ) -> Result<Option<Message>> {
        let frame = SpinFrame {
            rotation_degrees: 0.0,
            progress: 0.0,
            finished: false,
        };
        let message = self
            .bot
            .send_message(self.chat_id, render_wheel_frame(source, amount, catalog, &frame))
            .await?;

        Ok(Some(message))
    }

    async fn display_frame(
        &self,
        source: &Token,
        amount: &str,
        catalog: &[Token],
        frame: &SpinFrame,
        message: &Option<Message>,
    ) -> Result<()> {
        let text = render_wheel_frame(source, amount, catalog, frame);
        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .await?;
        } else {
            self.bot.send_message(self.chat_id, text).await?;
        }

        Ok(())
    }

    async fn display_result(&self, result: &SwapResult, message: Option<Message>) -> Result<()> {
        let text = render_result(result);

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(ui::result_keyboard())
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(ui::result_keyboard())
                .await?;
        }

        Ok(())
    }

    async fn display_validation_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("❌ {}", error_message))
            .await?;

        Ok(())
    }
}

/// Which catalog sector sits under the fixed top pointer after the wheel has
/// rotated clockwise by `rotation_degrees`. Sector `i` starts at
/// `i * 360/N` on the unrotated wheel.
pub fn pointer_sector(rotation_degrees: f64, sectors: usize) -> usize {
    if sectors == 0 {
        return 0;
    }
    let step = 360.0 / sectors as f64;
    let normalized = rotation_degrees.rem_euclid(360.0);
    let index = (((360.0 - normalized) % 360.0) / step).floor() as usize;
    index % sectors
}

/// Textual wheel: pointer marker on the sector currently at the top, plus a
/// progress bar while the spin is running.
pub fn render_wheel_frame(
    source: &Token,
    amount: &str,
    catalog: &[Token],
    frame: &SpinFrame,
) -> String {
    let under_pointer = pointer_sector(frame.rotation_degrees, catalog.len());

    let mut lines = Vec::with_capacity(catalog.len() + 4);
    if frame.finished {
        lines.push("🎡 The wheel has stopped!".to_string());
    } else if frame.progress > 0.0 {
        lines.push(format!("🎡 Spinning {} {}...", amount, source.symbol));
    } else {
        lines.push(format!("🎡 Wheel ready: {} {}", amount, source.symbol));
    }
    lines.push("        ▼".to_string());

    for (index, token) in catalog.iter().enumerate() {
        let marker = if index == under_pointer { "▸" } else { " " };
        lines.push(format!("{} {}", marker, token.symbol));
    }

    if !frame.finished {
        lines.push(format!(
            "{} {:.0}%",
            progress_bar(frame.progress, 10),
            frame.progress * 100.0
        ));
    }

    lines.join("\n")
}

/// Result panel, echoing the typed amount on both sides of the "swap"
pub fn render_result(result: &SwapResult) -> String {
    format!(
        "🎰 <b>Swap Result</b> 🎉\n\n\
        You swapped <b>{amount} {source}</b>\n\
        for\n\
        <b>{amount} {destination}</b>",
        amount = result.amount,
        source = result.source_token.symbol,
        destination = result.destination_token.symbol,
    )
}
