//! One-shot host activation.
//!
//! [`Bootstrap`] is the activation hook the hosting process invokes at
//! startup; [`Host`] is the context object it produces — the one place
//! owning the module set, tenant map, component registry, and virtual
//! resource surface. There is no process-wide mutable state: everything
//! that needs resolution borrows the host.
//!
//! Activation is race-safe and happens at most once: startup hooks may be
//! invoked repeatedly (or concurrently) and still produce a single
//! discovery scan and a single composition.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::HostConfig;
use crate::error::Result;
use crate::modules::{Module, ModuleScanner, TenantMap};
use crate::registry::{ComponentRegistry, PartCatalog};
use crate::vfs::VirtualResources;

/// The composed host: built once at startup, read-only afterwards, shared
/// freely across request threads.
pub struct Host {
    config: HostConfig,
    modules: Vec<Arc<Module>>,
    tenants: Arc<TenantMap>,
    registry: ComponentRegistry,
    resources: VirtualResources,
}

impl Host {
    /// The configuration the host was built with.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// All loaded modules.
    pub fn modules(&self) -> &[Arc<Module>] {
        &self.modules
    }

    /// Tenant ↔ module mapping.
    pub fn tenants(&self) -> &TenantMap {
        &self.tenants
    }

    /// The composed component registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// The virtual resource surface.
    pub fn resources(&self) -> &VirtualResources {
        &self.resources
    }
}

/// The startup activation hook.
pub struct Bootstrap {
    config: HostConfig,
    scanner: ModuleScanner,
    host: OnceCell<Host>,
}

impl Bootstrap {
    /// Prepare a bootstrap over the configured plugin root. Nothing is
    /// loaded until [`activate`] runs.
    ///
    /// [`activate`]: Bootstrap::activate
    pub fn new(config: HostConfig) -> Self {
        let scanner = ModuleScanner::new(config.plugin_root.clone());
        Self {
            config,
            scanner,
            host: OnceCell::new(),
        }
    }

    /// Build the host, exactly once. Subsequent (or concurrent) calls
    /// return the already-built host without re-scanning.
    ///
    /// An unreadable plugin root is logged and degrades to a zero-plugin
    /// host; a duplicate tenant key is a configuration error and fails
    /// activation outright.
    pub fn activate(&self, catalog: &PartCatalog) -> Result<&Host> {
        self.host.get_or_try_init(|| self.build(catalog))
    }

    /// The host, if activation already completed.
    pub fn host(&self) -> Option<&Host> {
        self.host.get()
    }

    /// Number of discovery scans performed.
    pub fn scan_count(&self) -> usize {
        self.scanner.scan_count()
    }

    fn build(&self, catalog: &PartCatalog) -> Result<Host> {
        let modules: Vec<Arc<Module>> = match self.scanner.discover() {
            Ok(modules) => modules.into_iter().map(Arc::new).collect(),
            Err(e) => {
                warn!(error = %e, "Module discovery failed, running with zero plugins");
                Vec::new()
            }
        };

        let mut tenants = TenantMap::new();
        for module in &modules {
            tenants.register(Arc::clone(module))?;
        }
        let tenants = Arc::new(tenants);

        let mut registry = ComponentRegistry::new();
        registry.compose(catalog);

        let resources = VirtualResources::new(&self.config, &modules, Arc::clone(&tenants));

        info!(
            modules = modules.len(),
            tenants = tenants.tenant_count(),
            url_providers = registry.url_provider_count(),
            controllers = registry.controller_count(),
            "Host activated"
        );

        Ok(Host {
            config: self.config.clone(),
            modules,
            tenants,
            registry,
            resources,
        })
    }
}
