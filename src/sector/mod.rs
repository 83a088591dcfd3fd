//! IPCC mitigation sectors with their intervention cost tables.

pub(crate) mod data;
mod model;

pub use model::{Intervention, MitigationSector};
