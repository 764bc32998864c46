use std::sync::{Arc, Mutex};

use rand_chacha::ChaCha8Rng;

use crate::engine::{seeded_rng, WheelConfig};
use crate::interactor::session::{ActiveSpins, SessionStore};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Wheel configuration (catalog, timing, easing)
    config: WheelConfig,

    // Shared wheel RNG; one seeded generator drives every spin and pick
    rng: Arc<Mutex<ChaCha8Rng>>,

    // Chats that have run /start (stands in for wallet connection)
    sessions: SessionStore,

    // Per-chat in-flight spin gate
    active_spins: ActiveSpins,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(config: WheelConfig) -> Self {
        let rng = Arc::new(Mutex::new(seeded_rng(config.rng_seed)));

        Self {
            config,
            rng,
            sessions: SessionStore::new(),
            active_spins: ActiveSpins::new(),
        }
    }

    // Accessor methods

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn rng(&self) -> Arc<Mutex<ChaCha8Rng>> {
        self.rng.clone()
    }

    pub fn sessions(&self) -> SessionStore {
        self.sessions.clone()
    }

    pub fn active_spins(&self) -> ActiveSpins {
        self.active_spins.clone()
    }
}
