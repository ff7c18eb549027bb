//! Error types for polyhost
//!
//! This module defines all error types used throughout the host subsystem.
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.

use thiserror::Error;

/// The primary error type for host operations.
#[derive(Error, Debug)]
pub enum HostError {
    /// Configuration-related errors (invalid config, bad manifest fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plugin directory could not be read during discovery. Non-fatal: the
    /// bootstrap logs it and continues with zero plugins.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Two modules derive the same tenant key. Always a startup configuration
    /// error, never silently resolved by overwriting.
    #[error("Duplicate tenant '{tenant}': module '{existing}' already owns it, rejected '{rejected}'")]
    DuplicateTenant {
        tenant: String,
        existing: String,
        rejected: String,
    },

    /// No module contains a resource matching the requested path.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The unique-basename fallback matched more than one resource. Serving
    /// any of them could leak another tenant's content, so this is fatal for
    /// the request.
    #[error("Ambiguous resource '{path}': {candidates} candidates match")]
    AmbiguousResource { path: String, candidates: usize },

    /// A module is known to own a resource name but holds no bytes for it.
    #[error("Stream unavailable: {0}")]
    StreamUnavailable(String),

    /// A hint-free registry lookup found more than one instance of the
    /// requested contract.
    #[error("Composition ambiguity: {count} instances of {contract} registered, hint required")]
    CompositionAmbiguity { contract: String, count: usize },

    /// Lookup by convention found nothing (controllers, url providers, etc.)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
