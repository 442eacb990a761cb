//! REST clients for the Gantry platform API and the external card vault
//!
//! Implements the `gantry-console` service traits over HTTP: a
//! bearer-token JSON client for the platform API and a form-encoded
//! client for the card vault (no vendor SDK dependency).

mod config;
mod http;
mod platform;
mod vault;

pub use config::ClientConfig;
pub use platform::PlatformClient;
pub use vault::CardVaultClient;
