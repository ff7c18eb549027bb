//! Resource name resolution.
//!
//! Maps a logical request path to the module and fully-qualified resource
//! name that satisfy it. Logical paths carry a variable tenant/segment
//! prefix that the resource name does not, so matching is layered, first
//! match wins:
//!
//! 1. permanent cache lookup by the normalized path;
//! 2. suffix match: the normalized path ends with a candidate's name;
//! 3. unique-basename fallback: candidates ending in `.<leaf file name>`,
//!    accepted only when exactly one exists.
//!
//! An ambiguous fallback (more than one candidate) is a hard failure, not a
//! silent pick: guessing here can serve one tenant's asset to another.
//! The resource set is static after load, so cache entries are permanent
//! and the worst-case scan is bounded and small.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{HostError, Result};
use crate::modules::Module;

use super::path_info::ResourcePathInfo;

/// A resolved resource: the owning module and its fully-qualified name.
#[derive(Debug, Clone)]
pub struct ResolvedResource {
    /// The module holding the resource bytes.
    pub module: Arc<Module>,
    /// Fully-qualified resource name, original casing.
    pub name: String,
}

struct Candidate {
    module: Arc<Module>,
    name: String,
    normalized: String,
}

/// Resolves logical paths against all known module resources, memoizing
/// permanently. Safe to share across request threads: the candidate list is
/// read-only and the cache tolerates benign duplicate-compute races.
pub struct ResourceResolver {
    candidates: Vec<Candidate>,
    cache: RwLock<HashMap<String, ResolvedResource>>,
    scans: AtomicUsize,
}

impl ResourceResolver {
    /// Build the candidate list from every (module, resource name) pair.
    pub fn new(modules: &[Arc<Module>]) -> Self {
        let mut candidates = Vec::new();
        for module in modules {
            for name in module.resources.keys() {
                candidates.push(Candidate {
                    module: Arc::clone(module),
                    name: name.clone(),
                    normalized: name.to_lowercase(),
                });
            }
        }
        Self {
            candidates,
            cache: RwLock::new(HashMap::new()),
            scans: AtomicUsize::new(0),
        }
    }

    /// Number of known resource candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Number of linear scans performed (cache misses). Lets tests observe
    /// that repeated resolution of the same path hits the cache.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Resolve a parsed path to its owning module and resource name.
    pub fn resolve(&self, path_info: &ResourcePathInfo) -> Result<ResolvedResource> {
        let key = path_info.normalized();

        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
        {
            return Ok(hit.clone());
        }

        self.scans.fetch_add(1, Ordering::SeqCst);

        if let Some(candidate) = self.candidates.iter().find(|c| key.ends_with(&c.normalized)) {
            debug!(path = %path_info.path(), resource = %candidate.name, "Resolved by suffix");
            return Ok(self.remember(key, candidate));
        }

        self.resolve_by_file_name(path_info, key)
    }

    /// Fallback: disambiguation by basename uniqueness.
    fn resolve_by_file_name(
        &self,
        path_info: &ResourcePathInfo,
        key: String,
    ) -> Result<ResolvedResource> {
        let file_name = path_info.file_name().to_lowercase();
        if file_name.is_empty() {
            return Err(HostError::ResourceNotFound(path_info.path().to_string()));
        }

        let suffix = format!(".{}", file_name);
        let matches: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| c.normalized.ends_with(&suffix))
            .collect();

        match matches.as_slice() {
            [only] => {
                debug!(path = %path_info.path(), resource = %only.name, "Resolved by unique basename");
                Ok(self.remember(key, only))
            }
            [] => Err(HostError::ResourceNotFound(path_info.path().to_string())),
            many => Err(HostError::AmbiguousResource {
                path: path_info.path().to_string(),
                candidates: many.len(),
            }),
        }
    }

    fn remember(&self, key: String, candidate: &Candidate) -> ResolvedResource {
        let resolved = ResolvedResource {
            module: Arc::clone(&candidate.module),
            name: candidate.name.clone(),
        };
        // Two threads may compute the same entry concurrently; both arrive
        // at the same value, so last-write-wins is harmless.
        self.cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, resolved.clone());
        resolved
    }
}
