//! Entity extractors for free-text queries.
//!
//! Each extractor is a pure function from text to an optional value,
//! independent of the others, driven by an ordered rule table in
//! [`patterns`]. All extractors case-fold their input; original casing is
//! never restored.

pub mod patterns;

mod days;
mod location;
mod magnitude;
mod radius;

pub use days::extract_days;
pub use location::extract_location;
pub use magnitude::extract_magnitude;
pub use radius::extract_radius_km;
