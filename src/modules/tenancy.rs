//! Tenant-to-module mapping.
//!
//! Each module's tenant key is the segment of its name before the first `.`
//! (convention: one module per client). The map answers lookups in both
//! directions, case-insensitively. Duplicate tenant keys are rejected at
//! registration: silently overwriting one direction of the map would route
//! one tenant's requests to another tenant's module.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::error::{HostError, Result};

use super::types::Module;

/// Bidirectional tenant ↔ module lookup. Built at startup, read-only after.
#[derive(Debug, Default)]
pub struct TenantMap {
    /// Lowercased tenant key to owning module.
    by_tenant: HashMap<String, Arc<Module>>,

    /// Lowercased module name to its (original-cased) tenant key.
    by_module_name: HashMap<String, String>,
}

impl TenantMap {
    /// Create an empty tenant map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its convention-derived tenant key.
    ///
    /// Fails with `HostError::DuplicateTenant` if another module already
    /// owns the key. Both lookup directions are updated atomically: either
    /// the module registers fully or not at all.
    pub fn register(&mut self, module: Arc<Module>) -> Result<()> {
        let tenant = module.tenant_key().to_string();
        let tenant_lower = tenant.to_lowercase();

        if let Some(existing) = self.by_tenant.get(&tenant_lower) {
            return Err(HostError::DuplicateTenant {
                tenant: tenant_lower,
                existing: existing.name().to_string(),
                rejected: module.name().to_string(),
            });
        }

        info!(tenant = %tenant, module = %module.name(), "Registered tenant");

        self.by_module_name
            .insert(module.name().to_lowercase(), tenant);
        self.by_tenant.insert(tenant_lower, module);
        Ok(())
    }

    /// The module owning a tenant key, matched case-insensitively.
    pub fn module_for(&self, tenant: &str) -> Option<&Arc<Module>> {
        self.by_tenant.get(&tenant.to_lowercase())
    }

    /// The tenant key derived from a module name, matched case-insensitively.
    pub fn tenant_for(&self, module_name: &str) -> Option<&str> {
        self.by_module_name
            .get(&module_name.to_lowercase())
            .map(|s| s.as_str())
    }

    /// Number of registered tenants.
    pub fn tenant_count(&self) -> usize {
        self.by_tenant.len()
    }
}
