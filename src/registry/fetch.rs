//! Convention-based fetch helpers over the component registry.
//!
//! These encode the naming conventions callers rely on: url provider types
//! are `<prefix>UrlProvider`, controller types are `<name>Controller`.
//! Controller lookup tries the shared host module before the tenant's
//! plugin module, so shared pages win over same-named plugin pages.

use std::sync::Arc;

use crate::error::{HostError, Result};

use super::contracts::{Controller, UrlProvider};
use super::ComponentRegistry;

/// Fetch a url provider by convention.
///
/// Without a client there are no hints: the single registered provider is
/// returned (ambiguity surfaces as an error). With a client, the type name
/// is `<prefix>UrlProvider` (prefix defaults to the client) and the client
/// doubles as the module hint. Absence is `Ok(None)`.
pub fn fetch_url_provider(
    registry: &ComponentRegistry,
    client: Option<&str>,
    type_prefix: Option<&str>,
) -> Result<Option<Arc<dyn UrlProvider>>> {
    let client = client.filter(|c| !c.trim().is_empty());
    let Some(client) = client else {
        return registry.url_provider(None, None);
    };

    let type_name = format!("{}UrlProvider", type_prefix.unwrap_or(client));
    registry.url_provider(Some(client), Some(&type_name))
}

/// Fetch a controller by convention, shared module first.
///
/// The type name is `<controller_name>Controller`. When a shared module
/// hint is given, its exact-name controller is preferred; otherwise (or on
/// a shared miss) the tenant's plugin module is searched with the client
/// hint. A miss in both is `HostError::NotFound` — the caller asked for a
/// concrete controller and got nothing to dispatch to.
pub fn fetch_controller(
    registry: &ComponentRegistry,
    shared_hint: Option<&str>,
    client: &str,
    controller_name: &str,
) -> Result<Arc<dyn Controller>> {
    let type_name = format!("{}Controller", controller_name);

    if let Some(shared) = shared_hint {
        if let Some(controller) = registry.controller(Some(shared), Some(&type_name))? {
            return Ok(controller);
        }
    }

    registry
        .controller(Some(client), Some(&type_name))?
        .ok_or_else(|| {
            HostError::NotFound(format!(
                "Controller '{}' not found for client '{}'",
                type_name, client
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PartCatalog;

    struct NamedProvider(&'static str);
    impl UrlProvider for NamedProvider {
        fn url(&self) -> String {
            self.0.to_string()
        }
    }

    struct NamedController(&'static str);
    impl Controller for NamedController {
        fn handle(&self, _action: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn composed_registry() -> ComponentRegistry {
        let mut catalog = PartCatalog::new();
        catalog
            .url_provider("Client1.Page", "Client1UrlProvider", || {
                Arc::new(NamedProvider("/Client1/Test/"))
            })
            .url_provider("Client1.Page", "OverrideUrlProvider", || {
                Arc::new(NamedProvider("/Client1/Test/Override"))
            })
            .controller("SharedWeb.Host", "HomeController", || {
                Arc::new(NamedController("shared-home"))
            })
            .controller("Client1.Page", "HomeController", || {
                Arc::new(NamedController("client1-home"))
            })
            .controller("Client1.Page", "AdminController", || {
                Arc::new(NamedController("client1-admin"))
            });
        let mut registry = ComponentRegistry::new();
        registry.compose(&catalog);
        registry
    }

    #[test]
    fn test_fetch_url_provider_default_prefix_is_client() {
        let registry = composed_registry();
        let provider = fetch_url_provider(&registry, Some("Client1"), None)
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client1/Test/");
    }

    #[test]
    fn test_fetch_url_provider_explicit_prefix() {
        let registry = composed_registry();
        let provider = fetch_url_provider(&registry, Some("Client1"), Some("Override"))
            .unwrap()
            .unwrap();
        assert_eq!(provider.url(), "/Client1/Test/Override");
    }

    #[test]
    fn test_fetch_url_provider_unknown_client_is_none() {
        let registry = composed_registry();
        let provider = fetch_url_provider(&registry, Some("Client9"), None).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_fetch_url_provider_blank_client_is_unhinted() {
        let registry = composed_registry();
        // Two providers registered: the unhinted path must refuse to guess.
        let result = fetch_url_provider(&registry, Some("  "), None);
        assert!(matches!(result, Err(HostError::CompositionAmbiguity { .. })));
    }

    #[test]
    fn test_fetch_controller_prefers_shared_module() {
        let registry = composed_registry();
        let controller =
            fetch_controller(&registry, Some("SharedWeb"), "Client1", "Home").unwrap();
        assert_eq!(controller.handle("Index").unwrap(), "shared-home");
    }

    #[test]
    fn test_fetch_controller_falls_back_to_plugin() {
        let registry = composed_registry();
        let controller =
            fetch_controller(&registry, Some("SharedWeb"), "Client1", "Admin").unwrap();
        assert_eq!(controller.handle("Index").unwrap(), "client1-admin");
    }

    #[test]
    fn test_fetch_controller_without_shared_hint() {
        let registry = composed_registry();
        let controller = fetch_controller(&registry, None, "Client1", "Home").unwrap();
        assert_eq!(controller.handle("Index").unwrap(), "client1-home");
    }

    #[test]
    fn test_fetch_controller_missing_is_not_found() {
        let registry = composed_registry();
        let result = fetch_controller(&registry, Some("SharedWeb"), "Client1", "Billing");
        assert!(matches!(result, Err(HostError::NotFound(_))));
    }
}
