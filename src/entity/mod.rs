mod bot_error;
mod state;
mod swap_result;
mod token;

pub use bot_error::BotError;
pub use state::State;
pub use swap_result::SwapResult;
pub use token::Token;
