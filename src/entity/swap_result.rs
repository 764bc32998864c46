use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Token;

/// Outcome of one completed wheel spin. No pricing exists anywhere in the
/// bot, so the destination amount is the literal string the user typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResult {
    pub spin_id: Uuid,
    pub source_token: Token,
    pub destination_token: Token,
    pub amount: String,
    pub spun_at: DateTime<Utc>,
}

impl SwapResult {
    pub fn new(source_token: Token, destination_token: Token, amount: String) -> Self {
        Self {
            spin_id: Uuid::new_v4(),
            source_token,
            destination_token,
            amount,
            spun_at: Utc::now(),
        }
    }
}
