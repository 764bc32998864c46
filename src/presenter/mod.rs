pub mod spin_presenter;

pub use spin_presenter::{SpinPresenter, SpinPresenterImpl};
