//! Component registry for polyhost
//!
//! The registry is the composition container: at startup it materializes
//! every part registered in the [`PartCatalog`] and answers hint-filtered
//! lookups per request. Composition happens at most once per registry;
//! after that the registry is read-only and safe to share across request
//! threads.
//!
//! Resolution semantics (per contract):
//! - no type-name hint: the single registered instance, `Ok(None)` when
//!   zero are registered, and `CompositionAmbiguity` when several are —
//!   multi-tenant callers must supply hints instead of getting an
//!   arbitrary instance.
//! - type-name hint: instances whose simple type name equals the hint; a
//!   module hint additionally requires the owning module's name to contain
//!   it (case-insensitive). First match, or `Ok(None)`. Absence is never
//!   an error here; callers decide whether it is fatal.

pub mod catalog;
pub mod contracts;
pub mod fetch;

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{HostError, Result};

pub use catalog::PartCatalog;
pub use contracts::{Controller, UrlProvider};
pub use fetch::{fetch_controller, fetch_url_provider};

/// A composed part: a contract instance with its registration keys.
struct Part<T: ?Sized> {
    module_name: String,
    type_name: String,
    instance: Arc<T>,
}

/// Holds composed parts per contract and answers resolution queries.
#[derive(Default)]
pub struct ComponentRegistry {
    composed: bool,
    url_providers: Vec<Part<dyn UrlProvider>>,
    controllers: Vec<Part<dyn Controller>>,
}

impl ComponentRegistry {
    /// Create an empty, not-yet-composed registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether composition has completed.
    pub fn is_composed(&self) -> bool {
        self.composed
    }

    /// Materialize all catalog registrations. Idempotent: a second call is
    /// a no-op.
    pub fn compose(&mut self, catalog: &PartCatalog) {
        if self.composed {
            return;
        }

        for entry in &catalog.url_providers {
            self.url_providers.push(Part {
                module_name: entry.module_name.clone(),
                type_name: entry.type_name.clone(),
                instance: (entry.factory)(),
            });
        }
        for entry in &catalog.controllers {
            self.controllers.push(Part {
                module_name: entry.module_name.clone(),
                type_name: entry.type_name.clone(),
                instance: (entry.factory)(),
            });
        }

        info!(
            url_providers = self.url_providers.len(),
            controllers = self.controllers.len(),
            "Composed component registry"
        );
        self.composed = true;
    }

    /// Resolve a url provider by optional module and type-name hints.
    pub fn url_provider(
        &self,
        module_hint: Option<&str>,
        type_name: Option<&str>,
    ) -> Result<Option<Arc<dyn UrlProvider>>> {
        find(&self.url_providers, "UrlProvider", module_hint, type_name)
    }

    /// Resolve a controller by optional module and type-name hints.
    pub fn controller(
        &self,
        module_hint: Option<&str>,
        type_name: Option<&str>,
    ) -> Result<Option<Arc<dyn Controller>>> {
        find(&self.controllers, "Controller", module_hint, type_name)
    }

    /// Number of composed url provider parts.
    pub fn url_provider_count(&self) -> usize {
        self.url_providers.len()
    }

    /// Number of composed controller parts.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}

fn find<T: ?Sized>(
    parts: &[Part<T>],
    contract: &str,
    module_hint: Option<&str>,
    type_name: Option<&str>,
) -> Result<Option<Arc<T>>> {
    let Some(type_name) = type_name.filter(|t| !t.trim().is_empty()) else {
        return match parts {
            [] => Ok(None),
            [only] => Ok(Some(Arc::clone(&only.instance))),
            _ => Err(HostError::CompositionAmbiguity {
                contract: contract.to_string(),
                count: parts.len(),
            }),
        };
    };

    let result = parts.iter().find(|p| {
        p.type_name == type_name
            && module_hint
                .map(|hint| p.module_name.to_lowercase().contains(&hint.to_lowercase()))
                .unwrap_or(true)
    });

    debug!(
        contract,
        type_name,
        module_hint = module_hint.unwrap_or(""),
        found = result.is_some(),
        "Resolved part"
    );

    Ok(result.map(|p| Arc::clone(&p.instance)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedProvider(&'static str);
    impl UrlProvider for NamedProvider {
        fn url(&self) -> String {
            self.0.to_string()
        }
    }

    struct EchoController;
    impl Controller for EchoController {
        fn handle(&self, action: &str) -> Result<String> {
            Ok(action.to_string())
        }
    }

    fn two_client_catalog() -> PartCatalog {
        let mut catalog = PartCatalog::new();
        catalog
            .url_provider("Client1.Page", "ShowUrlProvider", || {
                Arc::new(NamedProvider("/Client1/Test/"))
            })
            .url_provider("Client1.Page", "OverrideUrlProvider", || {
                Arc::new(NamedProvider("/Client1/Test/Override"))
            })
            .url_provider("Client2.Page", "ShowUrlProvider", || {
                Arc::new(NamedProvider("/Client2/Test/"))
            })
            .controller("Client1.Page", "HomeController", || Arc::new(EchoController));
        catalog
    }

    #[test]
    fn test_compose_materializes_parts() {
        let mut registry = ComponentRegistry::new();
        assert!(!registry.is_composed());
        registry.compose(&two_client_catalog());
        assert!(registry.is_composed());
        assert_eq!(registry.url_provider_count(), 3);
        assert_eq!(registry.controller_count(), 1);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let mut registry = ComponentRegistry::new();
        let catalog = two_client_catalog();
        registry.compose(&catalog);
        registry.compose(&catalog);
        assert_eq!(registry.url_provider_count(), 3);
    }

    #[test]
    fn test_resolve_with_both_hints() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        let provider = registry
            .url_provider(Some("Client1"), Some("ShowUrlProvider"))
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client1/Test/");

        let provider = registry
            .url_provider(Some("Client2"), Some("ShowUrlProvider"))
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client2/Test/");
    }

    #[test]
    fn test_resolve_never_crosses_tenants() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        // Type exists, but not under this module: absent, not wrong-tenant.
        let result = registry
            .url_provider(Some("Client2"), Some("OverrideUrlProvider"))
            .unwrap();
        assert!(result.is_none());

        // Module exists, but type does not.
        let result = registry
            .url_provider(Some("Client1"), Some("MissingUrlProvider"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_resolve_module_hint_is_case_insensitive_contains() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        let provider = registry
            .url_provider(Some("client1"), Some("OverrideUrlProvider"))
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client1/Test/Override");
    }

    #[test]
    fn test_resolve_type_hint_without_module_hint_takes_first() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        let provider = registry
            .url_provider(None, Some("OverrideUrlProvider"))
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client1/Test/Override");
    }

    #[test]
    fn test_resolve_without_hints_single_instance() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        let controller = registry.controller(None, None).unwrap().unwrap();
        assert_eq!(controller.handle("Index").unwrap(), "Index");
    }

    #[test]
    fn test_resolve_without_hints_ambiguous() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());

        let result = registry.url_provider(None, None);
        assert!(matches!(
            result,
            Err(HostError::CompositionAmbiguity { count: 3, .. })
        ));
    }

    #[test]
    fn test_resolve_without_hints_empty_is_none() {
        let registry = ComponentRegistry::new();
        assert!(registry.url_provider(None, None).unwrap().is_none());
        assert!(registry.controller(None, None).unwrap().is_none());
    }

    #[test]
    fn test_blank_type_hint_treated_as_absent() {
        let mut registry = ComponentRegistry::new();
        registry.compose(&two_client_catalog());
        let result = registry.url_provider(None, Some("  "));
        assert!(matches!(result, Err(HostError::CompositionAmbiguity { .. })));
    }
}
