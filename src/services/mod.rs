//! Query normalization and boundary resolution services.
//!
//! Services orchestrate the extractors, the calendar resolver, and the
//! geocoding collaborator into the two high-level operations callers use.

mod boundary;
mod normalizer;
pub mod regions;

pub use boundary::BoundaryResolver;
pub use normalizer::QueryNormalizer;
