//! Industry emissions reference model.
//!
//! Each industry carries its Scope-3 share and an ordered breakdown of the sectors
//! its indirect emissions come from. Percentages are kept exactly as disclosed and
//! are not normalized.

pub(crate) mod data;
mod model;

pub use model::{Dependency, GuidanceStatus, Industry};
