pub mod spin_view;

pub use spin_view::{SpinView, TelegramSpinView};
