//! # gravwell-types
//!
//! Shared types, identifiers, error types, and tuned constants
//! for the gravwell spacetime-fabric engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other gravwell crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{SpacetimeError, SpacetimeResult};
pub use ids::MassId;
