use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory registry of chats that ran /start. Stands in for the upstream
/// wallet-connection collaborator: the wheel is only offered to registered
/// chats. Nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    chats: Arc<Mutex<HashSet<i64>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chat; returns true if it was not registered before
    pub fn register(&self, telegram_id: i64) -> bool {
        self.chats.lock().unwrap().insert(telegram_id)
    }

    pub fn is_registered(&self, telegram_id: i64) -> bool {
        self.chats.lock().unwrap().contains(&telegram_id)
    }
}

/// Per-chat in-flight spin gate. A chat holds at most one running spin;
/// further triggers are refused until the spin completes.
#[derive(Clone, Default)]
pub struct ActiveSpins {
    chats: Arc<Mutex<HashSet<i64>>>,
}

impl ActiveSpins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate for a chat; false means a spin is already running there
    pub fn try_begin(&self, chat_id: i64) -> bool {
        self.chats.lock().unwrap().insert(chat_id)
    }

    pub fn is_spinning(&self, chat_id: i64) -> bool {
        self.chats.lock().unwrap().contains(&chat_id)
    }

    /// Release the gate once the spin has completed
    pub fn finish(&self, chat_id: i64) {
        self.chats.lock().unwrap().remove(&chat_id);
    }
}
