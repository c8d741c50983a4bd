//! astrobot-gateway — HTTP facade for the relay
//!
//! Exposes the health, chat, and provider-status endpoints over axum,
//! validates incoming requests, and wraps router resolutions in the JSON
//! wire envelope.

pub mod error;
pub mod protocol;
pub mod server;

pub use server::RelayServer;
