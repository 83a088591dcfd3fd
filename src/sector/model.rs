use serde::Serialize;

use crate::core::{CostRange, PathwayError, conversions};

/// A named mitigation measure and its cost text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intervention {
    pub name: String,
    /// `"$min-max/tCO2e"`, or text such as `"Mostly <$0/tCO2e"` or `"Variable costs"`.
    pub cost_range: String,
}

impl Intervention {
    #[must_use]
    pub fn cost_band(&self) -> Option<CostRange> {
        CostRange::parse(&self.cost_range)
    }
}

/// An IPCC AR6 mitigation sector (AFOLU, Industry, Transport, Buildings, Power).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MitigationSector {
    pub name: String,
    pub description: String,
    /// Interventions in authoring order.
    pub interventions: Vec<Intervention>,
    /// `"<number> GtCO2-eq by <year>"`.
    pub total_potential: String,
}

impl MitigationSector {
    /// Look up an intervention by name.
    #[must_use]
    pub fn intervention(&self, name: &str) -> Option<&Intervention> {
        self.interventions.iter().find(|i| i.name == name)
    }

    /// Numeric part of the total potential, in GtCO2-eq.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::Parse`] if the potential does not start with a number.
    pub fn potential_gt(&self) -> Result<f64, PathwayError> {
        conversions::potential_amount(&self.total_potential)
    }

    /// Target year of the total potential, if stated.
    #[must_use]
    pub fn potential_year(&self) -> Option<u16> {
        conversions::potential_year(&self.total_potential)
    }
}
