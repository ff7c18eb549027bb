//! Module types for polyhost
//!
//! This module defines the types used by the plugin module system: the
//! manifest structure parsed from `module.json` files and the runtime
//! representation of a loaded module with its in-memory resource table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};

/// Module names are dotted segments, e.g. `Client1.Page`: each segment is
/// alphanumerics and hyphens, starting alphanumeric.
static MODULE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\-]*(\.[a-zA-Z0-9][a-zA-Z0-9\-]*)*$")
        .unwrap_or_else(|e| panic!("invalid module name pattern: {}", e))
});

/// The manifest loaded from a module's `module.json` file.
///
/// Each plugin module directory must contain a `module.json` conforming to
/// this structure. The manifest declares the module's identity; the first
/// dotted segment of `name` doubles as the tenant key by convention.
///
/// # Example
///
/// ```json
/// {
///   "name": "Client1.Page",
///   "version": "1.0.0",
///   "description": "Client1 page components and assets"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Module name. Dotted segments of alphanumerics and hyphens,
    /// between 1 and 64 characters. The segment before the first `.`
    /// is the tenant key.
    pub name: String,

    /// Semantic version string (e.g., "1.0.0").
    pub version: String,

    /// Human-readable description of what the module provides.
    #[serde(default)]
    pub description: String,

    /// Optional author name or identifier.
    #[serde(default)]
    pub author: Option<String>,
}

/// Validate a module manifest for correctness.
///
/// - Name must be 1-64 characters of dotted alphanumeric/hyphen segments
/// - Version must be non-empty
pub fn validate_manifest(manifest: &ModuleManifest) -> Result<()> {
    if manifest.name.is_empty() || manifest.name.len() > 64 || !MODULE_NAME_RE.is_match(&manifest.name)
    {
        return Err(HostError::Config(format!(
            "Invalid module name '{}': must be 1-64 characters of dotted alphanumeric/hyphen segments",
            manifest.name
        )));
    }

    if manifest.version.trim().is_empty() {
        return Err(HostError::Config(format!(
            "Module '{}' has an empty version string",
            manifest.name
        )));
    }

    Ok(())
}

/// A loaded plugin module: manifest, origin path, and the resource table
/// read into memory at discovery.
///
/// Resource names are fully qualified: the module name joined with the
/// file's path relative to the module directory, separators replaced by
/// dots (`Client1.Page` + `Content/Site.css` →
/// `Client1.Page.Content.Site.css`). The table is populated exactly once
/// at load; modules are never re-read or unloaded.
#[derive(Debug, Clone)]
pub struct Module {
    /// The parsed module manifest.
    pub manifest: ModuleManifest,

    /// The directory path the module was loaded from.
    pub path: PathBuf,

    /// Fully-qualified resource name to content bytes. BTreeMap keeps
    /// candidate iteration order deterministic.
    pub resources: BTreeMap<String, Vec<u8>>,
}

impl Module {
    /// Create a module with an empty resource table.
    pub fn new(manifest: ModuleManifest, path: PathBuf) -> Self {
        Self {
            manifest,
            path,
            resources: BTreeMap::new(),
        }
    }

    /// Module name from its manifest.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Tenant key by convention: the segment before the first `.` of the
    /// module name. A module without dots owns its whole name as key.
    pub fn tenant_key(&self) -> &str {
        self.manifest
            .name
            .split('.')
            .next()
            .unwrap_or(&self.manifest.name)
    }

    /// Derive the fully-qualified resource name for a file path relative to
    /// the module directory.
    pub fn qualify_resource(&self, relative: &str) -> String {
        let dotted = relative.replace(['/', '\\'], ".");
        format!("{}.{}", self.manifest.name, dotted)
    }

    /// Content bytes for a fully-qualified resource name.
    pub fn resource(&self, name: &str) -> Option<&[u8]> {
        self.resources.get(name).map(|v| v.as_slice())
    }

    /// Number of resources held by this module.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
