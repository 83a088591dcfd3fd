//! Serializable view models for a presentation layer.
//!
//! Nothing here renders. Each shape is a direct, single-pass projection of catalog
//! records into the fields a chart or table binds to.

mod coverage;
mod sankey;
mod tables;
mod uncertainty;

pub use coverage::{COVERED_LABEL, CoverageSlice, CoverageSplit, GAP_LABEL, IndustryInsight};
pub use sankey::{SankeyDiagram, SankeyLink, SankeyNode};
pub use tables::{CostRow, GuidanceRow, SectorPotential};
pub use uncertainty::UncertaintyBar;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::PathwayError;
use crate::sensitivity::{SensitivityInputs, SensitivityModel, SensitivityResult};

/// Everything a dashboard shows for the currently selected industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub industry: String,
    pub scope3_share: f64,
    pub pathway_count: usize,
    pub sankey: SankeyDiagram,
    pub guidance_table: Vec<GuidanceRow>,
    pub coverage: CoverageSplit,
    pub insight: IndustryInsight,
    pub cost_table: Vec<CostRow>,
    pub sector_potentials: Vec<SectorPotential>,
    pub uncertainty: Vec<UncertaintyBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityResult>,
}

impl Dashboard {
    /// Create a builder for one industry of `catalog`.
    pub fn builder<'a>(catalog: &'a Catalog, industry: impl Into<String>) -> DashboardBuilder<'a> {
        DashboardBuilder::new(catalog, industry)
    }

    /// # Errors
    ///
    /// Returns [`PathwayError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PathwayError> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns [`PathwayError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, PathwayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A builder assembling a [`Dashboard`] snapshot.
pub struct DashboardBuilder<'a> {
    catalog: &'a Catalog,
    industry: String,
    model: SensitivityModel,
    inputs: Option<SensitivityInputs>,
}

impl<'a> DashboardBuilder<'a> {
    pub fn new(catalog: &'a Catalog, industry: impl Into<String>) -> Self {
        Self {
            catalog,
            industry: industry.into(),
            model: SensitivityModel::default(),
            inputs: None,
        }
    }

    /// Include a cost-sensitivity result computed from these slider values.
    #[must_use]
    pub const fn sensitivity(mut self, inputs: SensitivityInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Overrides the default cost model used for the sensitivity panel.
    #[must_use]
    pub const fn model(mut self, model: SensitivityModel) -> Self {
        self.model = model;
        self
    }

    /// Assembles the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::NotFound`] for an unknown industry,
    /// [`PathwayError::DivisionByZero`] for a zero carbon price and
    /// [`PathwayError::Parse`] for malformed colour or potential literals.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(industry = %self.industry)))]
    pub fn build(self) -> Result<Dashboard, PathwayError> {
        let industry = self.catalog.get_industry(&self.industry)?;

        let sensitivity = self
            .inputs
            .map(|inputs| self.model.evaluate(inputs))
            .transpose()?;

        Ok(Dashboard {
            industry: industry.name.clone(),
            scope3_share: industry.scope3_share,
            pathway_count: industry.pathway_count(),
            sankey: SankeyDiagram::for_industry(industry)?,
            guidance_table: GuidanceRow::for_industry(industry),
            coverage: CoverageSplit::for_industry(industry),
            insight: IndustryInsight::for_industry(industry),
            cost_table: CostRow::for_catalog(self.catalog),
            sector_potentials: SectorPotential::for_catalog(self.catalog)?,
            uncertainty: UncertaintyBar::for_industry(industry),
            sensitivity,
        })
    }
}
