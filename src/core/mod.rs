//! Core components of the `decarb-pathways` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The primary [`PathwayError`] type.
//! - Shared data models like [`CostRange`] and [`StatusIndicator`].
//! - Parsers for the text literals found in the catalogs.

/// Parsers and formatters for catalog text (cost ranges, potentials, colours).
pub mod conversions;
/// Polars `DataFrame` export of the tabular views.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// The primary error type (`PathwayError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules (e.g., `CostRange`).
pub mod models;

// convenient re-exports so most code can just `use crate::core::PathwayError`
pub use error::{EntityKind, PathwayError};
pub use models::{CostRange, StatusIndicator};

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
