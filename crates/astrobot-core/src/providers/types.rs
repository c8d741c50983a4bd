//! Provider-agnostic types for the fallback chain

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Source of a chat reply, as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    Local,
    Hosted,
    Offline,
}

/// Whether a reply came from a live provider or the canned fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Fallback,
}

/// Outcome of resolving one chat message. The provider field always names
/// the actual source of the text.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub text: String,
    pub provider: ProviderName,
    pub status: ReplyStatus,
}

/// Trait that all upstream adapters implement
///
/// `invoke` never errors outward: network failures, timeouts, bad statuses
/// and malformed bodies are caught inside the adapter, logged, and
/// reported as `None` so the router can move on to the next option.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Wire name of this adapter ("local", "hosted")
    fn name(&self) -> ProviderName;

    /// Ask the upstream for an answer; `None` means "try the next option"
    async fn invoke(&self, user_text: &str) -> Option<String>;

    /// Best-effort reachability check, fresh on every call
    async fn healthy(&self) -> bool;
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Hosted => write!(f, "hosted"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_display() {
        assert_eq!(ProviderName::Local.to_string(), "local");
        assert_eq!(ProviderName::Hosted.to_string(), "hosted");
        assert_eq!(ProviderName::Offline.to_string(), "offline");
    }

    #[test]
    fn test_provider_name_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProviderName::Local).unwrap(),
            "\"local\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderName::Offline).unwrap(),
            "\"offline\""
        );
    }

    #[test]
    fn test_reply_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReplyStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&ReplyStatus::Fallback).unwrap(),
            "\"fallback\""
        );
    }

    #[test]
    fn test_resolution_carries_source() {
        let resolution = Resolution {
            text: "hello".to_string(),
            provider: ProviderName::Hosted,
            status: ReplyStatus::Success,
        };
        assert_eq!(resolution.provider, ProviderName::Hosted);
        assert_eq!(resolution.status, ReplyStatus::Success);
    }
}
