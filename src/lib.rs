pub mod commands;
pub mod di;
pub mod engine;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod utils;
pub mod view;

use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;

// Re-export commonly used items
pub use commands::*;
pub use di::*;
pub use engine::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire up the application components for the dispatcher
pub fn create_application(
    config: WheelConfig,
) -> (
    TelegramRouter,
    Arc<ServiceContainer>,
    Arc<InMemStorage<State>>,
) {
    let services = Arc::new(ServiceContainer::new(config));
    let router = TelegramRouter::new(services.clone());
    let storage = InMemStorage::<State>::new();

    (router, services, storage)
}
