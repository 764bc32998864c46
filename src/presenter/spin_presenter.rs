use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::interactor::spin_interactor::SpinInteractor;
use crate::view::spin_view::SpinView;

#[async_trait]
pub trait SpinPresenter: Send + Sync {
    /// Run one full spin: validate, animate frame by frame, then present the
    /// swap result. Validation failures are reported through the view.
    async fn spin(&self, token_symbol: &str, amount_str: &str) -> Result<()>;
}

pub struct SpinPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SpinPresenterImpl<I, V>
where
    I: SpinInteractor,
    V: SpinView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SpinPresenter for SpinPresenterImpl<I, V>
where
    I: SpinInteractor + Send + Sync,
    V: SpinView + Send + Sync,
{
    async fn spin(&self, token_symbol: &str, amount_str: &str) -> Result<()> {
        let (amount, source) = match self
            .interactor
            .validate_spin_parameters(amount_str, token_symbol)
        {
            Ok(validated) => validated,
            Err(e) => {
                self.view.display_validation_error(e.to_string()).await?;
                return Ok(());
            }
        };

        let catalog = self.interactor.catalog().to_vec();
        let message = self
            .view
            .display_wheel_start(&source, &amount, &catalog)
            .await?;

        let mut animator = self.interactor.new_animator();
        let id = self
            .interactor
            .start_spin(&mut animator, Instant::now().into_std());
        info!(
            "Spin {:?} started: {} {} -> target {:.0}°",
            id,
            amount,
            source.symbol,
            animator.target_degrees().unwrap_or_default()
        );

        let mut ticker = interval(Duration::from_millis(
            self.interactor.config().frame_interval_ms,
        ));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first interval tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let frame = match animator.tick(id, Instant::now().into_std()) {
                Some(frame) => frame,
                None => break,
            };
            self.view
                .display_frame(&source, &amount, &catalog, &frame, &message)
                .await?;
            if frame.finished {
                break;
            }
        }

        let destination = self.interactor.pick_destination()?;
        info!(
            "Spin {:?} complete: {} {} for {} {}",
            id, amount, source.symbol, amount, destination.symbol
        );

        let result = self.interactor.build_result(source, destination, amount);
        self.view.display_result(&result, message).await?;

        Ok(())
    }
}
