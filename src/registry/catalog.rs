//! Part catalog: explicit factory registration for module components.
//!
//! Plugin modules register their contract implementations here under
//! `(module name, type name)` string keys at startup. This replaces
//! runtime type scanning with a statically checkable registration list
//! while keeping the no-central-manifest ergonomics: each module
//! contributes its own entries.

use std::sync::Arc;

use super::contracts::{Controller, UrlProvider};

type UrlProviderFactory = Box<dyn Fn() -> Arc<dyn UrlProvider> + Send + Sync>;
type ControllerFactory = Box<dyn Fn() -> Arc<dyn Controller> + Send + Sync>;

pub(crate) struct PartEntry<F> {
    pub module_name: String,
    pub type_name: String,
    pub factory: F,
}

/// Collects part registrations before composition.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use polyhost::registry::{PartCatalog, UrlProvider};
///
/// struct ShowUrlProvider;
/// impl UrlProvider for ShowUrlProvider {
///     fn url(&self) -> String {
///         "/Client1/Test/".to_string()
///     }
/// }
///
/// let mut catalog = PartCatalog::new();
/// catalog.url_provider("Client1.Page", "ShowUrlProvider", || Arc::new(ShowUrlProvider));
/// ```
#[derive(Default)]
pub struct PartCatalog {
    pub(crate) url_providers: Vec<PartEntry<UrlProviderFactory>>,
    pub(crate) controllers: Vec<PartEntry<ControllerFactory>>,
}

impl PartCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a url provider factory under its owning module and simple
    /// type name.
    pub fn url_provider<F>(&mut self, module_name: &str, type_name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn UrlProvider> + Send + Sync + 'static,
    {
        self.url_providers.push(PartEntry {
            module_name: module_name.to_string(),
            type_name: type_name.to_string(),
            factory: Box::new(factory),
        });
        self
    }

    /// Register a controller factory under its owning module and simple
    /// type name.
    pub fn controller<F>(&mut self, module_name: &str, type_name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn Controller> + Send + Sync + 'static,
    {
        self.controllers.push(PartEntry {
            module_name: module_name.to_string(),
            type_name: type_name.to_string(),
            factory: Box::new(factory),
        });
        self
    }

    /// Number of registered url provider factories.
    pub fn url_provider_count(&self) -> usize {
        self.url_providers.len()
    }

    /// Number of registered controller factories.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    struct TestProvider;
    impl UrlProvider for TestProvider {
        fn url(&self) -> String {
            "/test".to_string()
        }
    }

    struct TestController;
    impl Controller for TestController {
        fn handle(&self, action: &str) -> Result<String> {
            Ok(format!("handled {}", action))
        }
    }

    #[test]
    fn test_catalog_collects_registrations() {
        let mut catalog = PartCatalog::new();
        catalog
            .url_provider("Client1.Page", "TestProvider", || Arc::new(TestProvider))
            .controller("Client1.Page", "TestController", || Arc::new(TestController));

        assert_eq!(catalog.url_provider_count(), 1);
        assert_eq!(catalog.controller_count(), 1);
        assert_eq!(catalog.url_providers[0].module_name, "Client1.Page");
        assert_eq!(catalog.url_providers[0].type_name, "TestProvider");
    }

    #[test]
    fn test_factories_produce_instances() {
        let mut catalog = PartCatalog::new();
        catalog.url_provider("M", "TestProvider", || Arc::new(TestProvider));
        let instance = (catalog.url_providers[0].factory)();
        assert_eq!(instance.url(), "/test");
    }
}
