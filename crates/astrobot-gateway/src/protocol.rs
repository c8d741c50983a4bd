//! Relay wire format — JSON bodies for the HTTP surface

use serde::{Deserialize, Serialize};

use astrobot_core::providers::{ProviderName, ReplyStatus};

/// Client → relay chat request
///
/// `message` stays optional so the facade can tell "field missing" apart
/// from "field empty" and answer with the right 400 message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Relay → client chat reply
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub provider: ProviderName,
    pub status: ReplyStatus,
}
