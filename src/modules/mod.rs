//! Plugin module system for polyhost
//!
//! This module covers the startup half of the host: discovering plugin
//! modules on disk, loading their manifests and resources into memory, and
//! mapping tenants to the module that owns them.
//!
//! # Architecture
//!
//! - **types**: Core data structures (`ModuleManifest`, `Module`)
//! - **scanner**: One-shot directory discovery and module loading
//! - **tenancy**: Bidirectional tenant ↔ module mapping
//!
//! # Module Directory Structure
//!
//! ```text
//! ~/.polyhost/plugins/
//! ├── Client1.Page/
//! │   ├── module.json
//! │   ├── Content/
//! │   │   └── Site.css
//! │   └── Views/
//! │       └── Home/
//! │           └── Show.cshtml
//! └── Client2.Page/
//!     ├── module.json
//!     └── Scripts/
//!         └── app.js
//! ```
//!
//! The first dotted segment of a module's name (`Client1` above) is its
//! tenant key; requests carrying that tenant are served from that module's
//! resources and components.

pub mod scanner;
pub mod tenancy;
pub mod types;

pub use scanner::{load_module, ModuleScanner, MANIFEST_FILE};
pub use tenancy::TenantMap;
pub use types::{validate_manifest, Module, ModuleManifest};
