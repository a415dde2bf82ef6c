//! Scheme implementations.
//!
//! Each scheme provides its version type and the calculator producing
//! versions of that type.

pub mod pep440;
pub mod semantic;
