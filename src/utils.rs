use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::entity::BotError;

// Parse and validate a user-typed spin amount. Returns the trimmed literal
// string: the result panel echoes exactly what the user typed, there is no
// pricing to convert through.
pub fn parse_spin_amount(input: &str) -> Result<String, BotError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\d+(?:\.\d+)?$").unwrap();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BotError::InvalidAmount("amount is empty".to_string()));
    }
    if !RE.is_match(trimmed) {
        return Err(BotError::InvalidAmount(format!(
            "'{trimmed}' is not a number"
        )));
    }

    let amount = Decimal::from_str(trimmed)
        .map_err(|_| BotError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
    if amount <= Decimal::ZERO {
        return Err(BotError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

// Progress bar for wheel frames, e.g. "███████░░░"
pub fn progress_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_amounts_keep_their_literal_form() {
        assert_eq!(parse_spin_amount("10").unwrap(), "10");
        assert_eq!(parse_spin_amount(" 0.5 ").unwrap(), "0.5");
        assert_eq!(parse_spin_amount("100.000001").unwrap(), "100.000001");
    }

    #[test]
    fn empty_amount_is_rejected() {
        assert!(matches!(
            parse_spin_amount(""),
            Err(BotError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_spin_amount("   "),
            Err(BotError::InvalidAmount(_))
        ));
    }

    #[test]
    fn zero_and_garbage_are_rejected() {
        assert!(parse_spin_amount("0").is_err());
        assert!(parse_spin_amount("0.000").is_err());
        assert!(parse_spin_amount("-5").is_err());
        assert!(parse_spin_amount("ten").is_err());
        assert!(parse_spin_amount("1.2.3").is_err());
        assert!(parse_spin_amount("1e5").is_err());
    }

    #[test]
    fn progress_bar_fills_with_progress() {
        assert_eq!(progress_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(0.5, 10), "█████░░░░░");
        assert_eq!(progress_bar(1.0, 10), "██████████");
        assert_eq!(progress_bar(1.7, 10), "██████████");
    }
}
