//! Polyhost - Multi-tenant plugin host resolution subsystem
//!
//! Loads independent client plugin modules at startup and, per request,
//! resolves which component answers a named contract, which module-owned
//! resource satisfies a requested path, and which module owns a tenant.
//! The surrounding web framework consumes this through the [`Host`] context
//! object built once by [`Bootstrap::activate`].

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod modules;
pub mod registry;
pub mod resources;
pub mod vfs;

pub use bootstrap::{Bootstrap, Host};
pub use config::HostConfig;
pub use error::{HostError, Result};
pub use registry::PartCatalog;
