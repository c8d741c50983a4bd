//! Provider fallback chain
//!
//! The Ollama (local) and Groq (hosted) adapters implement the [`Provider`]
//! trait and are composed via [`ProviderRouter`] in fixed priority order,
//! with canned offline answers as the guaranteed terminal fallback.

pub mod groq;
pub mod ollama;
pub mod router;
pub mod types;

pub use groq::GroqProvider;
pub use ollama::OllamaProvider;
pub use router::{ProviderRouter, recommend};
pub use types::{Provider, ProviderName, ReplyStatus, Resolution};
