use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The kind of catalog entry a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// An industry in the emissions reference model.
    Industry,
    /// An IPCC mitigation sector.
    Sector,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Industry => "industry",
            Self::Sector => "mitigation sector",
        })
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PathwayError {
    /// The requested identifier is not part of the fixed catalog.
    #[error("unknown {kind}: {id:?}")]
    NotFound {
        /// Which catalog was searched.
        kind: EntityKind,
        /// The identifier that failed to match.
        id: String,
    },

    /// A carbon price of zero would divide the adjusted cost by zero.
    #[error("carbon price {carbon_price} yields a zero carbon factor")]
    DivisionByZero {
        /// The carbon price that was supplied.
        carbon_price: f64,
    },

    /// A catalog literal could not be interpreted as a number.
    #[error("Data format unexpected: {0}")]
    Parse(String),

    /// The calculator configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A view could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathwayError {
    pub(crate) fn industry_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Industry,
            id: id.to_string(),
        }
    }

    pub(crate) fn sector_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Sector,
            id: id.to_string(),
        }
    }

    /// Returns `true` if this error is a failed catalog lookup.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
