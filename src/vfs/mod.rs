//! Virtual resource surface.
//!
//! The façade the web framework calls: "does this path exist", "give me
//! this path's content", "where does this tenant's view live". It composes
//! the resolver, fetcher, tenant map, and view locator behind a stable
//! interface; the framework never sees modules or resource names.
//!
//! Static-asset extensions (`.js`, `.css` by default) report not-ours from
//! [`VirtualResources::exists`]: those paths belong to the static file
//! route, which streams them through [`VirtualResources::open`] and
//! [`VirtualResources::content_type_for`] itself.

pub mod view_locations;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::HostConfig;
use crate::error::Result;
use crate::modules::{Module, TenantMap};
use crate::resources::{ContentFetcher, ResourcePathInfo, ResourceResolver};

pub use view_locations::ViewLocator;

/// The resolution façade handed to the web framework.
pub struct VirtualResources {
    resolver: ResourceResolver,
    fetcher: ContentFetcher,
    tenants: Arc<TenantMap>,
    locator: ViewLocator,
    static_extensions: Vec<String>,
    content_types: HashMap<String, String>,
}

impl VirtualResources {
    /// Compose the surface over the loaded module set.
    pub fn new(config: &HostConfig, modules: &[Arc<Module>], tenants: Arc<TenantMap>) -> Self {
        let transform_extension = config
            .template_extensions
            .first()
            .map(|s| s.as_str())
            .unwrap_or("cshtml");
        Self {
            resolver: ResourceResolver::new(modules),
            fetcher: ContentFetcher::new(transform_extension),
            tenants,
            locator: ViewLocator::new(config),
            static_extensions: config.static_extensions.clone(),
            content_types: config.content_types.clone(),
        }
    }

    /// Whether a logical path resolves to a module resource. Static-asset
    /// extensions always report `false` so the static route serves them.
    pub fn exists(&self, path: &str) -> bool {
        if self.is_static_path(path) {
            return false;
        }
        let info = ResourcePathInfo::new(path);
        self.resolver.resolve(&info).is_ok()
    }

    /// Resolve and fetch a logical path's content. Unlike [`exists`], no
    /// static-extension gate applies: the static route reuses this to
    /// stream module assets.
    ///
    /// [`exists`]: VirtualResources::exists
    pub fn open(&self, path: &str) -> Result<Vec<u8>> {
        let info = ResourcePathInfo::new(path);
        let resolved = self.resolver.resolve(&info)?;
        debug!(path, module = %resolved.module.name(), resource = %resolved.name, "Opening resource");
        self.fetcher.fetch(&resolved.module, &resolved.name)
    }

    /// Content type for a path's extension, if mapped.
    pub fn content_type_for(&self, path: &str) -> Option<&str> {
        let ext = extension(path)?;
        self.content_types.get(&ext.to_lowercase()).map(|s| s.as_str())
    }

    /// Locate a tenant's view: substitute the owning module into the view
    /// search paths and return the first candidate that exists. `None` when
    /// the tenant is unknown or no candidate resolves.
    pub fn view_path(&self, tenant: &str, controller: &str, view: &str) -> Option<String> {
        let module = self.tenants.module_for(tenant)?;
        self.locator
            .locate(module.name(), controller, view, |candidate| self.exists(candidate))
    }

    /// The underlying resolver, exposed for cache/scan instrumentation.
    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    fn is_static_path(&self, path: &str) -> bool {
        extension(path)
            .map(|ext| {
                self.static_extensions
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

fn extension(path: &str) -> Option<&str> {
    let leaf = path.rsplit('/').next()?;
    let (_, ext) = leaf.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
