//! Resource resolution and content fetching.
//!
//! The request half of the host: turning a logical resource path into the
//! module-owned bytes that satisfy it.
//!
//! # Architecture
//!
//! - **path_info**: Immutable parsed request path (`ResourcePathInfo`)
//! - **resolver**: Layered name matching with a permanent cache
//! - **fetcher**: Content bytes, with the template-header transform
//! - **view_header**: The pure `@model`/`@inherits` text transform

pub mod fetcher;
pub mod path_info;
pub mod resolver;
pub mod view_header;

pub use fetcher::ContentFetcher;
pub use path_info::ResourcePathInfo;
pub use resolver::{ResolvedResource, ResourceResolver};
pub use view_header::prepend_view_header;
