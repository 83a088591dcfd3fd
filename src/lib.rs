//! decarb-pathways: industry emission profiles and abatement cost sensitivity.
//!
//! The crate holds two immutable reference tables and one pure calculator:
//!
//! - [`industry`]: CDP-disclosed Scope-3 profiles per industry, broken down by the
//!   sectors each industry depends on, with the guidance status of every dependency.
//! - [`sector`]: IPCC AR6 mitigation sectors, their intervention cost ranges and
//!   total mitigation potential.
//! - [`sensitivity`]: adjusted abatement cost from carbon price, technology
//!   learning rate and policy timeline, with a three-level feasibility label.
//!
//! [`Catalog`] ties the tables together behind name lookups, and [`views`] shapes
//! records into serializable chart and table models for a presentation layer.
//!
//! # Example
//!
//! ```
//! use decarb_pathways::{Catalog, SensitivityBuilder};
//!
//! let catalog = Catalog::builtin();
//! for name in catalog.list_industries() {
//!     let coverage = catalog.guidance_coverage(name)?;
//!     println!("{name}: {coverage}% of Scope 3 has guidance");
//! }
//!
//! let result = SensitivityBuilder::new().carbon_price(150.0).calculate()?;
//! println!("{:.1} -> {}", result.adjusted_cost, result.feasibility);
//! # Ok::<(), decarb_pathways::PathwayError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: instrument lookups and calculations with `tracing` spans.
//! - `dataframe`: export tabular views as Polars `DataFrame`s.

pub mod catalog;
pub mod core;
pub mod industry;
pub mod sector;
pub mod sensitivity;
pub mod views;

pub use catalog::{Catalog, get_industry, get_sector, guidance_coverage, list_industries, list_sectors};
pub use crate::core::{CostRange, EntityKind, PathwayError, StatusIndicator};
pub use industry::{Dependency, GuidanceStatus, Industry};
pub use sector::{Intervention, MitigationSector};
pub use sensitivity::{
    Feasibility, SensitivityBuilder, SensitivityInputs, SensitivityModel, SensitivityModelBuilder,
    SensitivityResult, SliderBounds, adjusted_cost,
};
pub use views::{Dashboard, DashboardBuilder};

#[cfg(feature = "dataframe")]
pub use crate::core::ToDataFrame;
