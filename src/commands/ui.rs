use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::entity::Token;

pub fn wheel_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("🎡 Spin to Swap", "spin")],
        vec![
            InlineKeyboardButton::callback("Tokens", "tokens"),
            InlineKeyboardButton::callback("Help", "help"),
        ],
    ])
}

/// One button per catalog token; the first entry is the default source
pub fn token_select_keyboard(catalog: &[Token]) -> InlineKeyboardMarkup {
    let rows = catalog
        .iter()
        .map(|token| {
            vec![InlineKeyboardButton::callback(
                token.label(),
                format!("spin_token_{}", token.symbol),
            )]
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

pub fn spin_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🎲 Spin to Swap",
        "spin_go",
    )]])
}

pub fn result_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Close",
        "spin_close",
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::default_catalog;

    #[test]
    fn token_keyboard_has_one_row_per_token() {
        let catalog = default_catalog();
        let keyboard = token_select_keyboard(&catalog);
        assert_eq!(keyboard.inline_keyboard.len(), catalog.len());
        assert!(keyboard.inline_keyboard[0][0].text.contains("cbBTC"));
    }
}
