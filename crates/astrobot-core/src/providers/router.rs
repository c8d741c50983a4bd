//! Priority-ordered provider chain with a guaranteed offline fallback

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::offline::offline_reply;

use super::types::{Provider, ProviderName, ReplyStatus, Resolution};

/// Routes chat messages across providers in fixed priority order
///
/// Adapters are tried strictly one after another — the order is a
/// deliberate priority, not a race. The first present, non-empty reply
/// wins; if every adapter declines, the canned offline answer is used,
/// so `resolve` cannot fail.
pub struct ProviderRouter {
    /// Providers in priority order (index 0 = preferred)
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderRouter {
    /// Create a router over providers in priority order
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Result<Self> {
        if providers.is_empty() {
            return Err(anyhow!("ProviderRouter requires at least one provider"));
        }
        Ok(Self { providers })
    }

    /// Resolve one message to a reply, trying each provider in turn
    pub async fn resolve(&self, user_text: &str) -> Resolution {
        for provider in &self.providers {
            debug!("Trying provider {}", provider.name());

            if let Some(text) = provider.invoke(user_text).await {
                if !text.is_empty() {
                    info!("Answering via {}", provider.name());
                    return Resolution {
                        text,
                        provider: provider.name(),
                        status: ReplyStatus::Success,
                    };
                }
            }
        }

        info!("All providers declined, using offline fallback");
        Resolution {
            text: offline_reply(user_text).to_string(),
            provider: ProviderName::Offline,
            status: ReplyStatus::Fallback,
        }
    }

    /// Probe every provider, in priority order. Results are computed
    /// fresh on each call, never cached.
    pub async fn health(&self) -> Vec<(ProviderName, bool)> {
        let mut results = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            results.push((provider.name(), provider.healthy().await));
        }
        results
    }

    /// The static set of configured provider names, in priority order
    pub fn provider_names(&self) -> Vec<ProviderName> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Number of configured providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

/// Pick the provider a client should expect to serve its next request:
/// the first reachable entry of a priority-ordered health listing, or
/// offline when nothing is reachable.
pub fn recommend(health: &[(ProviderName, bool)]) -> ProviderName {
    health
        .iter()
        .find(|(_, reachable)| *reachable)
        .map(|(name, _)| *name)
        .unwrap_or(ProviderName::Offline)
}
