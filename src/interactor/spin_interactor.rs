use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand_chacha::ChaCha8Rng;

use crate::engine::{pick, seeded_rng, SpinAnimator, SpinId, WheelConfig};
use crate::entity::{BotError, SwapResult, Token};
use crate::utils;

/// Business logic for one wheel spin: parameter validation, target draw,
/// outcome pick. All randomness goes through the one shared seeded generator.
pub trait SpinInteractor: Send + Sync {
    fn config(&self) -> &WheelConfig;

    fn catalog(&self) -> &[Token];

    /// Validate the typed amount and the chosen source token. Returns the
    /// literal amount string and the resolved catalog token.
    fn validate_spin_parameters(
        &self,
        amount_str: &str,
        token_symbol: &str,
    ) -> Result<(String, Token), BotError>;

    /// Fresh animator configured for this wheel
    fn new_animator(&self) -> SpinAnimator;

    /// Draw a rotation target and begin the spin
    fn start_spin(&self, animator: &mut SpinAnimator, now: Instant) -> SpinId;

    /// Uniform destination pick over the catalog
    fn pick_destination(&self) -> Result<Token, BotError>;

    /// Assemble the result presented to the user. The amount is echoed on
    /// both sides; no conversion exists.
    fn build_result(&self, source: Token, destination: Token, amount: String) -> SwapResult;
}

pub struct SpinInteractorImpl {
    config: WheelConfig,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SpinInteractorImpl {
    pub fn new(config: WheelConfig, rng: Arc<Mutex<ChaCha8Rng>>) -> Self {
        Self { config, rng }
    }

    /// Convenience constructor wiring up the generator from config
    pub fn from_config(config: WheelConfig) -> Self {
        let rng = Arc::new(Mutex::new(seeded_rng(config.rng_seed)));
        Self::new(config, rng)
    }
}

impl SpinInteractor for SpinInteractorImpl {
    fn config(&self) -> &WheelConfig {
        &self.config
    }

    fn catalog(&self) -> &[Token] {
        &self.config.tokens
    }

    fn validate_spin_parameters(
        &self,
        amount_str: &str,
        token_symbol: &str,
    ) -> Result<(String, Token), BotError> {
        let amount = utils::parse_spin_amount(amount_str)?;
        let token = self
            .config
            .find_token(token_symbol)
            .ok_or_else(|| BotError::UnknownToken(token_symbol.to_string()))?
            .clone();
        Ok((amount, token))
    }

    fn new_animator(&self) -> SpinAnimator {
        SpinAnimator::new(&self.config)
    }

    fn start_spin(&self, animator: &mut SpinAnimator, now: Instant) -> SpinId {
        let mut rng = self.rng.lock().unwrap();
        animator.start(now, &mut *rng)
    }

    fn pick_destination(&self) -> Result<Token, BotError> {
        let mut rng = self.rng.lock().unwrap();
        pick(&self.config.tokens, &mut *rng)
            .cloned()
            .ok_or(BotError::EmptyCatalog)
    }

    fn build_result(&self, source: Token, destination: Token, amount: String) -> SwapResult {
        SwapResult::new(source, destination, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interactor_with_seed(seed: u64) -> SpinInteractorImpl {
        let config = WheelConfig {
            rng_seed: Some(seed),
            ..WheelConfig::default()
        };
        SpinInteractorImpl::from_config(config)
    }

    #[test]
    fn validation_resolves_token_and_keeps_amount_literal() {
        let interactor = interactor_with_seed(1);
        let (amount, token) = interactor.validate_spin_parameters("10", "weth").unwrap();
        assert_eq!(amount, "10");
        assert_eq!(token.symbol, "WETH");
    }

    #[test]
    fn validation_rejects_empty_amount() {
        let interactor = interactor_with_seed(1);
        assert!(matches!(
            interactor.validate_spin_parameters("", "WETH"),
            Err(BotError::InvalidAmount(_))
        ));
    }

    #[test]
    fn validation_rejects_unknown_token() {
        let interactor = interactor_with_seed(1);
        assert!(matches!(
            interactor.validate_spin_parameters("10", "DOGE"),
            Err(BotError::UnknownToken(_))
        ));
    }

    #[test]
    fn destination_always_comes_from_the_catalog() {
        let interactor = interactor_with_seed(77);
        for _ in 0..100 {
            let destination = interactor.pick_destination().unwrap();
            assert!(interactor
                .catalog()
                .iter()
                .any(|t| t.symbol == destination.symbol));
        }
    }

    #[test]
    fn same_seed_spins_identically() {
        let a = interactor_with_seed(2024);
        let b = interactor_with_seed(2024);
        let mut animator_a = a.new_animator();
        let mut animator_b = b.new_animator();
        let now = Instant::now();
        a.start_spin(&mut animator_a, now);
        b.start_spin(&mut animator_b, now);
        assert_eq!(animator_a.target_degrees(), animator_b.target_degrees());
        assert_eq!(
            a.pick_destination().unwrap().symbol,
            b.pick_destination().unwrap().symbol
        );
    }

    #[test]
    fn result_echoes_the_amount_for_both_sides() {
        let interactor = interactor_with_seed(5);
        let source = interactor.catalog()[0].clone();
        let destination = interactor.pick_destination().unwrap();
        let result = interactor.build_result(source.clone(), destination, "10".to_string());
        assert_eq!(result.amount, "10");
        assert_eq!(result.source_token.symbol, source.symbol);
    }
}
