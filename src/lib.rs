//! Client-side bindings for the platform's web API: session bootstrap,
//! user/profile models and CDN URL resolution.

pub mod cdn;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod identify;
pub mod models;
pub mod session;

pub use error::{Error, Result};
pub use session::Session;

/// Library version, following semantic versioning.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
