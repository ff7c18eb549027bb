//! Parsed logical resource paths.
//!
//! A `ResourcePathInfo` is a pure value derived once from the raw request
//! path: its segments (after stripping the `~/` app-root marker), the leaf
//! file name, and the normalized dotted form used as the resolver's cache
//! key.

/// An immutable parsed logical resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePathInfo {
    path: String,
    segments: Vec<String>,
}

impl ResourcePathInfo {
    /// Parse a logical path such as `~/Plugins/Client1.Page/Content/Site.css`.
    pub fn new(path: &str) -> Self {
        let trimmed = path.replace("~/", "");
        let segments = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        Self {
            path: path.to_string(),
            segments,
        }
    }

    /// The raw path as given.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path segments after stripping the app-root marker.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The module-name segment: by route convention the second segment
    /// (`~/Plugins/<Module>/...`). `None` for paths too short to carry one.
    pub fn module_segment(&self) -> Option<&str> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(&self.segments[1])
    }

    /// The leaf file name (last segment), empty for an empty path.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Normalized dotted form: app-root marker stripped, separators replaced
    /// by dots, lowercased. This is the permanent cache key.
    pub fn normalized(&self) -> String {
        self.path.replace("~/", "").replace('/', ".").to_lowercase()
    }
}
