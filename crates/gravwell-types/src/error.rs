//! Error types for the gravwell engine.
//!
//! All crates return `SpacetimeResult<T>` from fallible operations.
//! Geometric misses (a ray that hits nothing) are not errors; they are
//! reported as `None` by the functions that compute them.

use thiserror::Error;

use crate::ids::MassId;

/// Unified error type for the gravwell engine.
#[derive(Debug, Error)]
pub enum SpacetimeError {
    /// A body was created with a non-positive or non-finite radius or mass.
    #[error("Invalid mass: {0}")]
    InvalidMass(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Something the engine cannot run without was never provided.
    #[error("Missing prerequisite: {0}")]
    PrerequisiteMissing(&'static str),

    /// A lookup referenced a mass that is not in the registry.
    #[error("Unknown mass: {0}")]
    UnknownMass(MassId),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SpacetimeError>`.
pub type SpacetimeResult<T> = Result<T, SpacetimeError>;
