use std::env;
use std::fs;

use crate::entity::{BotError, Token};

use super::easing::Easing;

/// Wheel configuration
#[derive(Debug, Clone)]
pub struct WheelConfig {
    /// Spin duration in milliseconds
    pub spin_duration_ms: u64,

    /// Minimum number of full rotations, so the animation always reads as
    /// "spinning" before it settles
    pub base_full_spins: u32,

    /// Interval between rendered wheel frames in milliseconds
    pub frame_interval_ms: u64,

    /// Easing curve for the spin
    pub easing: Easing,

    /// Fixed seed for the wheel RNG (reproducible runs); None seeds from
    /// the OS
    pub rng_seed: Option<u64>,

    /// Token catalog shown on the wheel
    pub tokens: Vec<Token>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 6000,
            base_full_spins: 5,
            frame_interval_ms: 500,
            easing: Easing::default(),
            rng_seed: None,
            tokens: default_catalog(),
        }
    }
}

impl WheelConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. The catalog may be replaced wholesale by
    /// pointing `WHEEL_CATALOG_PATH` at a JSON array of tokens.
    pub fn from_env() -> Result<Self, BotError> {
        let defaults = Self::default();

        let tokens = match env::var("WHEEL_CATALOG_PATH") {
            Ok(path) => load_catalog(&path)?,
            Err(_) => defaults.tokens,
        };

        let config = Self {
            spin_duration_ms: parse_env_var("WHEEL_SPIN_DURATION_MS", defaults.spin_duration_ms)?,
            base_full_spins: parse_env_var("WHEEL_BASE_FULL_SPINS", defaults.base_full_spins)?,
            frame_interval_ms: parse_env_var("WHEEL_FRAME_INTERVAL_MS", defaults.frame_interval_ms)?,
            easing: defaults.easing,
            rng_seed: match env::var("WHEEL_RNG_SEED") {
                Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                    BotError::InvalidConfig(format!("WHEEL_RNG_SEED is not a u64: {raw}"))
                })?),
                Err(_) => None,
            },
            tokens,
        };

        config.validate()?;
        Ok(config)
    }

    /// Catalog and timing sanity checks, run once at startup
    pub fn validate(&self) -> Result<(), BotError> {
        if self.tokens.is_empty() {
            return Err(BotError::EmptyCatalog);
        }
        if self.spin_duration_ms == 0 {
            return Err(BotError::InvalidConfig(
                "spin duration must be positive".to_string(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(BotError::InvalidConfig(
                "frame interval must be positive".to_string(),
            ));
        }
        let mut symbols: Vec<&str> = self.tokens.iter().map(|t| t.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        if symbols.len() != self.tokens.len() {
            return Err(BotError::InvalidConfig(
                "token symbols must be unique".to_string(),
            ));
        }
        Ok(())
    }

    /// Look up a catalog token by symbol (case-insensitive)
    pub fn find_token(&self, symbol: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }
}

fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, BotError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| BotError::InvalidConfig(format!("{name} is invalid: {raw}"))),
        Err(_) => Ok(default),
    }
}

fn load_catalog(path: &str) -> Result<Vec<Token>, BotError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| BotError::InvalidConfig(format!("cannot read catalog {path}: {e}")))?;
    serde_json::from_str(&raw)
        .map_err(|e| BotError::InvalidConfig(format!("cannot parse catalog {path}: {e}")))
}

/// Built-in wheel catalog, mirroring the original casino wheel
pub fn default_catalog() -> Vec<Token> {
    vec![
        Token {
            symbol: "cbBTC".to_string(),
            name: "Coinbase Wrapped BTC".to_string(),
            color: "#FFD700".to_string(),
            logo_uri: Some("/assets/cbbtc.webp".to_string()),
        },
        Token {
            symbol: "DEGEN".to_string(),
            name: "DEGEN".to_string(),
            color: "#8A2BE2".to_string(),
            logo_uri: Some("/assets/degen.avif".to_string()),
        },
        Token {
            symbol: "WETH".to_string(),
            name: "Wrapped Ethereum".to_string(),
            color: "#FFC0CB".to_string(),
            logo_uri: Some("/assets/weth.webp".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WheelConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let config = WheelConfig {
            tokens: vec![],
            ..WheelConfig::default()
        };
        assert!(matches!(config.validate(), Err(BotError::EmptyCatalog)));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let config = WheelConfig {
            spin_duration_ms: 0,
            ..WheelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let mut tokens = default_catalog();
        let dupe = tokens[0].clone();
        tokens.push(dupe);
        let config = WheelConfig {
            tokens,
            ..WheelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn token_lookup_ignores_case() {
        let config = WheelConfig::default();
        assert_eq!(config.find_token("weth").unwrap().symbol, "WETH");
        assert_eq!(config.find_token("CBBTC").unwrap().symbol, "cbBTC");
        assert!(config.find_token("DOGE").is_none());
    }
}
