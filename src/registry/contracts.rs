//! Capability contracts that plugin modules can implement.
//!
//! Contracts are the seams between the host and plugin code: a module
//! exports implementations of these traits through the [`PartCatalog`]
//! rather than being scanned for them.
//!
//! [`PartCatalog`]: super::catalog::PartCatalog

use crate::error::Result;

/// Provides the destination URL for a tenant's entry point.
///
/// Multiple modules may export url providers; registry hints select the
/// right one per tenant.
pub trait UrlProvider: Send + Sync {
    /// The URL this provider routes to.
    fn url(&self) -> String;
}

/// Activation contract for request handlers exported by a module.
///
/// The surrounding web framework dispatches to a resolved controller; the
/// host only decides *which* instance answers.
pub trait Controller: Send + Sync {
    /// Handle a named action and produce a response body.
    fn handle(&self, action: &str) -> Result<String>;
}
