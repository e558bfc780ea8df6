//! Core data model types.

pub mod location;
pub mod query;
pub mod time;

pub use location::{BoundingBox, FeatureClass, LocationMatch};
pub use query::{QueryOverrides, QueryParameters, SearchStrategy};
pub use time::{ResolvedDateRange, Season, SourceConstraints, SpanAnchor, SpanUnit, TimeExpression};
