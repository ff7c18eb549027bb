//! Resource content fetching.
//!
//! Given a resolved module and resource name, hands back the content bytes.
//! View templates are piped through the header transform on the way out;
//! everything else is served verbatim.

use crate::error::{HostError, Result};
use crate::modules::Module;

use super::view_header::prepend_view_header;

/// Fetches resource bytes, applying the view-header transform to template
/// resources.
pub struct ContentFetcher {
    /// Lowercased extension (without dot) that triggers the transform.
    transform_extension: String,
}

impl ContentFetcher {
    /// Create a fetcher that transforms resources with the given template
    /// extension.
    pub fn new(transform_extension: &str) -> Self {
        Self {
            transform_extension: transform_extension.to_lowercase(),
        }
    }

    /// Fetch the bytes for a fully-qualified resource name.
    ///
    /// Fails with `HostError::StreamUnavailable` when the module does not
    /// hold content under that name — resolution said it should, so this is
    /// a module packaging defect, fatal for the request.
    pub fn fetch(&self, module: &Module, resource_name: &str) -> Result<Vec<u8>> {
        let bytes = module.resource(resource_name).ok_or_else(|| {
            HostError::StreamUnavailable(format!(
                "Module '{}' has no content for '{}'",
                module.name(),
                resource_name
            ))
        })?;

        if self.is_template(resource_name) {
            let text = String::from_utf8_lossy(bytes);
            return Ok(prepend_view_header(&text).into_bytes());
        }

        Ok(bytes.to_vec())
    }

    fn is_template(&self, resource_name: &str) -> bool {
        resource_name
            .to_lowercase()
            .ends_with(&format!(".{}", self.transform_extension))
    }
}
