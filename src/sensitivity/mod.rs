//! Abatement cost-sensitivity calculator.
//!
//! A pure function of three slider inputs. Nothing is cached; callers recompute on
//! every input change.

mod constants;
mod model;

pub use model::{
    Feasibility, SensitivityInputs, SensitivityModel, SensitivityModelBuilder, SensitivityResult,
    SliderBounds,
};

use crate::core::PathwayError;

/// A builder for one cost-sensitivity calculation.
///
/// Unset inputs take their slider defaults (carbon price 100, learning rate 15%,
/// policy timeline 4 years).
///
/// # Example
///
/// ```
/// use decarb_pathways::{Feasibility, SensitivityBuilder};
///
/// let result = SensitivityBuilder::new()
///     .carbon_price(100.0)
///     .tech_learning_rate(15.0)
///     .policy_timeline_years(4.0)
///     .calculate()?;
/// assert!((result.adjusted_cost - 84.0).abs() < 1e-9);
/// assert_eq!(result.feasibility, Feasibility::ModeratelyFeasible);
/// # Ok::<(), decarb_pathways::PathwayError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SensitivityBuilder {
    model: SensitivityModel,
    inputs: SensitivityInputs,
}

impl SensitivityBuilder {
    /// Creates a builder using the default cost model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom cost model for this calculation.
    #[must_use]
    pub const fn model(mut self, model: SensitivityModel) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn carbon_price(mut self, value: f64) -> Self {
        self.inputs.carbon_price = value;
        self
    }

    /// Technology learning rate in percent (15 means 15%).
    #[must_use]
    pub const fn tech_learning_rate(mut self, value: f64) -> Self {
        self.inputs.tech_learning_rate = value;
        self
    }

    #[must_use]
    pub const fn policy_timeline_years(mut self, value: f64) -> Self {
        self.inputs.policy_timeline_years = value;
        self
    }

    /// Runs the calculation.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::DivisionByZero`] when the carbon price is zero.
    pub fn calculate(self) -> Result<SensitivityResult, PathwayError> {
        self.model.evaluate(self.inputs)
    }
}

/// Calculate with the default model.
///
/// # Errors
///
/// Returns [`PathwayError::DivisionByZero`] when `carbon_price` is zero.
pub fn adjusted_cost(
    carbon_price: f64,
    tech_learning_rate: f64,
    policy_timeline_years: f64,
) -> Result<SensitivityResult, PathwayError> {
    SensitivityModel::default().evaluate(SensitivityInputs {
        carbon_price,
        tech_learning_rate,
        policy_timeline_years,
    })
}
