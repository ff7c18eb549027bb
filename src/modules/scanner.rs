//! Plugin directory scanning and module loading.
//!
//! Discovery is a one-shot startup operation: each subdirectory of the
//! plugin root containing a `module.json` manifest becomes a loaded
//! [`Module`], with every resource file under it read fully into memory.
//! Once loaded, modules live for the process lifetime; there is no reload.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{info, warn};

use crate::error::{HostError, Result};

use super::types::{validate_manifest, Module, ModuleManifest};

/// Manifest file expected at the root of every module directory.
pub const MANIFEST_FILE: &str = "module.json";

/// Scans a configured plugin root for loadable modules.
pub struct ModuleScanner {
    root: PathBuf,
    scans: AtomicUsize,
}

impl ModuleScanner {
    /// Create a scanner over the given plugin root directory.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            scans: AtomicUsize::new(0),
        }
    }

    /// The plugin root this scanner reads.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of discovery scans performed so far. Lets callers assert the
    /// one-scan-per-process invariant.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Discover and load all modules under the plugin root.
    ///
    /// A missing root or an empty match set yields an empty set, not a
    /// failure, so the host can run with zero plugins. An unreadable root
    /// surfaces `HostError::Discovery`. Modules with invalid or malformed
    /// manifests are logged and skipped; they never fail the scan.
    pub fn discover(&self) -> Result<Vec<Module>> {
        self.scans.fetch_add(1, Ordering::SeqCst);

        if !self.root.exists() {
            info!(root = %self.root.display(), "Plugin root does not exist, running with zero plugins");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            HostError::Discovery(format!(
                "Failed to read plugin root {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let mut modules = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| HostError::Discovery(format!("Failed to read directory entry: {}", e)))?;

            let entry_path = entry.path();
            if !entry_path.is_dir() {
                continue;
            }

            if !entry_path.join(MANIFEST_FILE).exists() {
                continue;
            }

            match load_module(&entry_path) {
                Ok(module) => {
                    info!(
                        module = %module.name(),
                        version = %module.manifest.version,
                        resources = module.resource_count(),
                        "Discovered module"
                    );
                    modules.push(module);
                }
                Err(e) => {
                    warn!(
                        dir = %entry_path.display(),
                        error = %e,
                        "Failed to load module, skipping"
                    );
                }
            }
        }

        Ok(modules)
    }
}

/// Load a single module from its directory.
///
/// Reads and validates `module.json`, then walks the directory and reads
/// every other file into the module's resource table under its
/// fully-qualified dotted name.
pub fn load_module(dir: &Path) -> Result<Module> {
    let manifest_path = dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        return Err(HostError::Config(format!(
            "No {} found in {}",
            MANIFEST_FILE,
            dir.display()
        )));
    }

    let content = fs::read_to_string(&manifest_path).map_err(|e| {
        HostError::Config(format!("Failed to read {}: {}", manifest_path.display(), e))
    })?;

    let manifest: ModuleManifest = serde_json::from_str(&content)?;
    validate_manifest(&manifest)?;

    let mut module = Module::new(manifest, dir.to_path_buf());
    collect_resources(dir, dir, &mut module)?;
    Ok(module)
}

fn collect_resources(base: &Path, dir: &Path, module: &mut Module) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_resources(base, &path, module)?;
            continue;
        }

        // The manifest is metadata, not a servable resource.
        if dir == base && entry.file_name() == MANIFEST_FILE {
            continue;
        }

        let relative = path
            .strip_prefix(base)
            .map_err(|e| HostError::Config(format!("Path outside module root: {}", e)))?
            .to_string_lossy()
            .to_string();
        let name = module.qualify_resource(&relative);
        let bytes = fs::read(&path)?;
        module.resources.insert(name, bytes);
    }
    Ok(())
}
