pub mod session;
pub mod spin_interactor;

pub use session::{ActiveSpins, SessionStore};
pub use spin_interactor::{SpinInteractor, SpinInteractorImpl};
