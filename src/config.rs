//! Host configuration.
//!
//! All convention tables live here as data rather than hardcoded branches:
//! the plugin root directory, the extension-to-content-type table, the view
//! search-location templates, and the extension lists that decide which
//! resources get the template-header transform and which are left to the
//! static file route.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};

/// Host configuration, typically loaded from a `host.json` at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Directory scanned for plugin module subdirectories.
    pub plugin_root: PathBuf,

    /// URL segment under which per-module view trees are addressed,
    /// e.g. `~/Plugins/Client1.Page/Views/...`.
    pub plugins_segment: String,

    /// View search-location templates, in probe order. Placeholders:
    /// `{plugins}`, `{module}`, `{controller}`, `{view}`, `{ext}`.
    ///
    /// The tenant-specific view directory must come before the shared one;
    /// that ordering is the disambiguation policy when both could match.
    pub view_locations: Vec<String>,

    /// Template syntax extensions, in probe order. The first entry is also
    /// the extension that triggers the view-header transform on fetch.
    pub template_extensions: Vec<String>,

    /// Extensions always handed to the static file route, never resolved
    /// against module resources by the virtual surface.
    pub static_extensions: Vec<String>,

    /// Lowercased file extension to content type.
    pub content_types: HashMap<String, String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            plugin_root: default_plugin_root(),
            plugins_segment: "Plugins".to_string(),
            view_locations: default_view_locations(),
            template_extensions: default_template_extensions(),
            static_extensions: default_static_extensions(),
            content_types: default_content_types(),
        }
    }
}

fn default_plugin_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".polyhost")
        .join("plugins")
}

fn default_view_locations() -> Vec<String> {
    vec![
        "~/{plugins}/{module}/Views/{controller}/{view}.{ext}".to_string(),
        "~/{plugins}/{module}/Views/Shared/{view}.{ext}".to_string(),
    ]
}

fn default_template_extensions() -> Vec<String> {
    vec!["cshtml".to_string(), "vbhtml".to_string()]
}

fn default_static_extensions() -> Vec<String> {
    vec!["js".to_string(), "css".to_string()]
}

fn default_content_types() -> HashMap<String, String> {
    [
        ("css", "text/css"),
        ("js", "application/javascript"),
        ("html", "text/html"),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("svg", "image/svg+xml"),
        ("ico", "image/x-icon"),
        ("woff", "font/woff"),
        ("woff2", "font/woff2"),
        ("ttf", "font/ttf"),
        ("eot", "application/vnd.ms-fontobject"),
        ("json", "application/json"),
        ("txt", "text/plain"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl HostConfig {
    /// Load configuration from a JSON file. Missing fields fall back to
    /// defaults via serde.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HostError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: HostConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Content type for a lowercased extension, if mapped.
    pub fn content_type(&self, extension: &str) -> Option<&str> {
        self.content_types
            .get(&extension.to_lowercase())
            .map(|s| s.as_str())
    }

    /// Whether the extension belongs to the static file route.
    pub fn is_static_extension(&self, extension: &str) -> bool {
        self.static_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }

    /// Whether the extension names a view template (header transform applies
    /// to the first configured template extension).
    pub fn is_template_extension(&self, extension: &str) -> bool {
        self.template_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
