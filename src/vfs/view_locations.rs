//! Per-tenant view search-path expansion.
//!
//! The web framework asks "where does tenant T's view V for controller C
//! live?". The answer is produced by substituting the tenant's owning
//! module into an ordered list of location templates and probing each
//! candidate until one exists. The ordering is the disambiguation policy:
//! the tenant-specific view directory always wins over the shared one, and
//! the first template extension wins over the second.

use crate::config::HostConfig;

/// Expands and probes view location templates for a module.
#[derive(Debug, Clone)]
pub struct ViewLocator {
    templates: Vec<String>,
    extensions: Vec<String>,
    plugins_segment: String,
}

impl ViewLocator {
    /// Build a locator from the configured location data.
    pub fn new(config: &HostConfig) -> Self {
        Self {
            templates: config.view_locations.clone(),
            extensions: config.template_extensions.clone(),
            plugins_segment: config.plugins_segment.clone(),
        }
    }

    /// All candidate paths for a view, in probe order: each location
    /// template crossed with each extension, extensions innermost.
    pub fn candidates(&self, module_name: &str, controller: &str, view: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(self.templates.len() * self.extensions.len());
        for template in &self.templates {
            for ext in &self.extensions {
                out.push(self.expand(template, module_name, controller, view, ext));
            }
        }
        out
    }

    /// First candidate the probe reports as existing.
    pub fn locate<F>(
        &self,
        module_name: &str,
        controller: &str,
        view: &str,
        exists: F,
    ) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        self.candidates(module_name, controller, view)
            .into_iter()
            .find(|candidate| exists(candidate))
    }

    fn expand(
        &self,
        template: &str,
        module_name: &str,
        controller: &str,
        view: &str,
        ext: &str,
    ) -> String {
        template
            .replace("{plugins}", &self.plugins_segment)
            .replace("{module}", module_name)
            .replace("{controller}", controller)
            .replace("{view}", view)
            .replace("{ext}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> ViewLocator {
        ViewLocator::new(&HostConfig::default())
    }

    #[test]
    fn test_candidate_order_view_before_shared_first_ext_first() {
        let candidates = locator().candidates("Client1.Page", "Home", "Show");
        assert_eq!(
            candidates,
            vec![
                "~/Plugins/Client1.Page/Views/Home/Show.cshtml",
                "~/Plugins/Client1.Page/Views/Home/Show.vbhtml",
                "~/Plugins/Client1.Page/Views/Shared/Show.cshtml",
                "~/Plugins/Client1.Page/Views/Shared/Show.vbhtml",
            ]
        );
    }

    #[test]
    fn test_locate_returns_first_existing() {
        let found = locator().locate("Client1.Page", "Home", "Show", |p| {
            p.contains("/Shared/") && p.ends_with(".cshtml")
        });
        assert_eq!(
            found.as_deref(),
            Some("~/Plugins/Client1.Page/Views/Shared/Show.cshtml")
        );
    }

    #[test]
    fn test_locate_prefers_tenant_dir_over_shared() {
        // Both exist: the tenant-specific directory must win.
        let found = locator().locate("Client1.Page", "Home", "Show", |p| p.ends_with(".cshtml"));
        assert_eq!(
            found.as_deref(),
            Some("~/Plugins/Client1.Page/Views/Home/Show.cshtml")
        );
    }

    #[test]
    fn test_locate_none_when_nothing_exists() {
        assert!(locator()
            .locate("Client1.Page", "Home", "Show", |_| false)
            .is_none());
    }
}
