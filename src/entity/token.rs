use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String, // Token symbol (e.g. "cbBTC", "WETH")
    pub name: String,   // Full token name
    pub color: String,  // Wheel sector color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>, // Token logo URI (optional)
}

impl Token {
    /// Display label used in keyboards and token listings
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}
