use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::{PathwayError, StatusIndicator, conversions};
use crate::industry::Industry;

/// One row of an industry's guidance coverage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceRow {
    /// Contributing sector, as named by the dependency.
    pub sector: String,
    /// e.g. `"40%"`.
    pub materiality: String,
    /// SBTi guidance label.
    pub guidance: String,
    /// IPCC cost range text.
    pub cost_range: String,
    /// Coverage glyph derived from `guidance`.
    pub status: StatusIndicator,
}

impl GuidanceRow {
    /// Rows for every dependency of `industry`, in authoring order.
    #[must_use]
    pub fn for_industry(industry: &Industry) -> Vec<Self> {
        industry
            .sector_dependencies
            .iter()
            .map(|dep| Self {
                sector: dep.sector.clone(),
                materiality: conversions::percent_label(dep.materiality_pct),
                guidance: dep.guidance_status.to_string(),
                cost_range: dep.cost_range.clone(),
                status: dep.guidance_status.indicator(),
            })
            .collect()
    }
}

/// One intervention of the flattened IPCC cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostRow {
    /// Mitigation sector name.
    pub sector: String,
    /// Intervention name within the sector.
    pub intervention: String,
    /// Cost text, e.g. `"$0-20/tCO2e"`.
    pub cost_range: String,
    /// The sector's total potential, repeated on every row.
    pub potential: String,
}

impl CostRow {
    /// Every intervention of every sector, sector-major in authoring order.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Vec<Self> {
        catalog
            .sectors()
            .flat_map(|sector| {
                sector.interventions.iter().map(move |iv| Self {
                    sector: sector.name.clone(),
                    intervention: iv.name.clone(),
                    cost_range: iv.cost_range.clone(),
                    potential: sector.total_potential.clone(),
                })
            })
            .collect()
    }
}

/// A bar of the sectoral mitigation potential chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorPotential {
    /// Mitigation sector name.
    pub sector: String,
    /// GtCO2-eq.
    pub potential: f64,
}

impl SectorPotential {
    /// # Errors
    ///
    /// Returns [`PathwayError::Parse`] if a sector's potential is not numeric.
    pub fn for_catalog(catalog: &Catalog) -> Result<Vec<Self>, PathwayError> {
        catalog
            .sectors()
            .map(|sector| -> Result<Self, PathwayError> {
                Ok(Self {
                    sector: sector.name.clone(),
                    potential: sector.potential_gt()?,
                })
            })
            .collect()
    }
}
