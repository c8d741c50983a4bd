//! astrobot-core - the relay's decision logic
//!
//! This crate provides:
//! - Space-focused prompt construction for upstream models
//! - Adapters for Ollama (local) and Groq (hosted) behind the [`Provider`] trait
//! - Canned offline answers that never fail
//! - A priority-ordered [`ProviderRouter`] that short-circuits on the first
//!   successful adapter and falls back to the offline answers

pub mod offline;
pub mod prompt;
pub mod providers;

// Re-export main types for convenience
pub use offline::offline_reply;
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use providers::{
    GroqProvider, OllamaProvider, Provider, ProviderName, ProviderRouter, ReplyStatus, Resolution,
};
