use std::fmt;

use serde::Serialize;

use super::constants::{
    CARBON_PRICE_REFERENCE, DEFAULT_BASE_COST, DEFAULT_CHALLENGING_FROM,
    DEFAULT_HIGHLY_FEASIBLE_BELOW, DEFAULT_LEARNING_MULTIPLIER, DEFAULT_POLICY_HORIZON_YEARS,
    DEFAULT_POLICY_STEP,
};
use crate::core::PathwayError;

/// Qualitative feasibility band for an adjusted abatement cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feasibility {
    /// Below the lower threshold. Negative costs land here too.
    #[serde(rename = "Highly Feasible")]
    HighlyFeasible,
    /// Between the thresholds, lower bound inclusive.
    #[serde(rename = "Moderately Feasible")]
    ModeratelyFeasible,
    /// At or above the upper threshold.
    #[serde(rename = "Challenging")]
    Challenging,
}

impl Feasibility {
    /// Classify a cost against the default thresholds (80 and 120).
    #[must_use]
    pub fn classify(adjusted_cost: f64) -> Self {
        SensitivityModel::default().classify(adjusted_cost)
    }

    /// The display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyFeasible => "Highly Feasible",
            Self::ModeratelyFeasible => "Moderately Feasible",
            Self::Challenging => "Challenging",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three slider inputs of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityInputs {
    /// Carbon price in currency per tonne.
    pub carbon_price: f64,
    /// Technology learning rate in percent.
    pub tech_learning_rate: f64,
    /// Years until policy takes effect.
    pub policy_timeline_years: f64,
}

impl Default for SensitivityInputs {
    fn default() -> Self {
        Self {
            carbon_price: SliderBounds::CARBON_PRICE.default,
            tech_learning_rate: SliderBounds::TECH_LEARNING_RATE.default,
            policy_timeline_years: SliderBounds::POLICY_TIMELINE_YEARS.default,
        }
    }
}

/// Outcome of a calculation, with every intermediate factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityResult {
    /// The inputs the result was computed from.
    pub inputs: SensitivityInputs,
    /// Reference abatement cost before adjustment.
    pub base_cost: f64,
    /// Multiplier from the policy timeline; 1 at the neutral horizon.
    pub policy_factor: f64,
    /// Multiplier from the technology learning rate.
    pub tech_factor: f64,
    /// Carbon price relative to the reference price of 100.
    pub carbon_factor: f64,
    /// Adjusted abatement cost per tonne. Infinite if the quotient overflows.
    pub adjusted_cost: f64,
    /// Band of `adjusted_cost` under the model's thresholds.
    pub feasibility: Feasibility,
}

/// Advisory range and default for a slider control.
///
/// The calculator does not enforce these; presentation layers use them to bound their controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderBounds {
    /// Lower end of the control.
    pub min: f64,
    /// Upper end of the control.
    pub max: f64,
    /// Initial position of the control.
    pub default: f64,
}

impl SliderBounds {
    /// Carbon price, currency per tonne.
    pub const CARBON_PRICE: Self = Self {
        min: 50.0,
        max: 150.0,
        default: 100.0,
    };
    /// Technology learning rate, percent.
    pub const TECH_LEARNING_RATE: Self = Self {
        min: 5.0,
        max: 25.0,
        default: 15.0,
    };
    /// Policy timeline, years.
    pub const POLICY_TIMELINE_YEARS: Self = Self {
        min: 2.0,
        max: 6.0,
        default: 4.0,
    };

    /// Clamp a value into the slider range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies inside the slider range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Coefficients of the adjusted-cost formula and its feasibility thresholds.
///
/// ```text
/// policy_factor = 1 + (policy_horizon_years - policy_timeline_years) * policy_step
/// tech_factor   = 1 - (tech_learning_rate / 100) * learning_multiplier
/// carbon_factor = carbon_price / 100
/// adjusted_cost = base_cost * policy_factor * tech_factor / carbon_factor
/// ```
///
/// [`SensitivityModel::default`] reproduces the reference dashboard exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityModel {
    base_cost: f64,
    highly_feasible_below: f64,
    challenging_from: f64,
    policy_horizon_years: f64,
    policy_step: f64,
    learning_multiplier: f64,
}

impl Default for SensitivityModel {
    fn default() -> Self {
        Self {
            base_cost: DEFAULT_BASE_COST,
            highly_feasible_below: DEFAULT_HIGHLY_FEASIBLE_BELOW,
            challenging_from: DEFAULT_CHALLENGING_FROM,
            policy_horizon_years: DEFAULT_POLICY_HORIZON_YEARS,
            policy_step: DEFAULT_POLICY_STEP,
            learning_multiplier: DEFAULT_LEARNING_MULTIPLIER,
        }
    }
}

impl SensitivityModel {
    /// Create a new builder.
    pub fn builder() -> SensitivityModelBuilder {
        SensitivityModelBuilder::default()
    }

    #[must_use]
    pub const fn base_cost(&self) -> f64 {
        self.base_cost
    }

    #[must_use]
    pub const fn thresholds(&self) -> (f64, f64) {
        (self.highly_feasible_below, self.challenging_from)
    }

    /// Compute the adjusted cost for one set of inputs.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::DivisionByZero`] when `carbon_price` is zero. Inputs are
    /// otherwise taken as given: a learning rate above 50% produces a negative cost,
    /// which classifies as [`Feasibility::HighlyFeasible`]. A non-zero price small enough
    /// for the quotient to overflow (subnormal prices such as `1e-320`) yields an infinite
    /// `adjusted_cost`, which classifies as [`Feasibility::Challenging`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), err))]
    pub fn evaluate(&self, inputs: SensitivityInputs) -> Result<SensitivityResult, PathwayError> {
        let policy_factor =
            1.0 + (self.policy_horizon_years - inputs.policy_timeline_years) * self.policy_step;
        let tech_factor = 1.0 - (inputs.tech_learning_rate / 100.0) * self.learning_multiplier;

        // Checked on the price: a subnormal price underflows to a zero factor.
        if inputs.carbon_price == 0.0 {
            return Err(PathwayError::DivisionByZero {
                carbon_price: inputs.carbon_price,
            });
        }

        let carbon_factor = inputs.carbon_price / CARBON_PRICE_REFERENCE;
        let adjusted_cost = self.base_cost * policy_factor * tech_factor / carbon_factor;

        #[cfg(feature = "tracing")]
        tracing::debug!(adjusted_cost, "adjusted abatement cost");

        Ok(SensitivityResult {
            inputs,
            base_cost: self.base_cost,
            policy_factor,
            tech_factor,
            carbon_factor,
            adjusted_cost,
            feasibility: self.classify(adjusted_cost),
        })
    }

    /// Place a cost into a feasibility band. NaN falls through to `Challenging`.
    #[must_use]
    pub fn classify(&self, adjusted_cost: f64) -> Feasibility {
        if adjusted_cost < self.highly_feasible_below {
            Feasibility::HighlyFeasible
        } else if adjusted_cost < self.challenging_from {
            Feasibility::ModeratelyFeasible
        } else {
            Feasibility::Challenging
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct SensitivityModelBuilder {
    base_cost: Option<f64>,
    highly_feasible_below: Option<f64>,
    challenging_from: Option<f64>,
    policy_horizon_years: Option<f64>,
    policy_step: Option<f64>,
    learning_multiplier: Option<f64>,
}

impl SensitivityModelBuilder {
    /// Override the reference abatement cost. Default: 100.
    #[must_use]
    pub fn base_cost(mut self, value: f64) -> Self {
        self.base_cost = Some(value);
        self
    }

    /// Override both feasibility thresholds. Default: 80 and 120.
    #[must_use]
    pub fn thresholds(mut self, highly_feasible_below: f64, challenging_from: f64) -> Self {
        self.highly_feasible_below = Some(highly_feasible_below);
        self.challenging_from = Some(challenging_from);
        self
    }

    /// Override the neutral policy horizon. Default: 6 years.
    #[must_use]
    pub fn policy_horizon_years(mut self, value: f64) -> Self {
        self.policy_horizon_years = Some(value);
        self
    }

    /// Override the per-year policy increment. Default: 0.1.
    #[must_use]
    pub fn policy_step(mut self, value: f64) -> Self {
        self.policy_step = Some(value);
        self
    }

    /// Override the learning-rate multiplier. Default: 2.
    #[must_use]
    pub fn learning_multiplier(mut self, value: f64) -> Self {
        self.learning_multiplier = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`PathwayError::Config`] if any coefficient is not finite or the
    /// thresholds are inverted.
    pub fn build(self) -> Result<SensitivityModel, PathwayError> {
        let model = SensitivityModel {
            base_cost: self.base_cost.unwrap_or(DEFAULT_BASE_COST),
            highly_feasible_below: self
                .highly_feasible_below
                .unwrap_or(DEFAULT_HIGHLY_FEASIBLE_BELOW),
            challenging_from: self.challenging_from.unwrap_or(DEFAULT_CHALLENGING_FROM),
            policy_horizon_years: self
                .policy_horizon_years
                .unwrap_or(DEFAULT_POLICY_HORIZON_YEARS),
            policy_step: self.policy_step.unwrap_or(DEFAULT_POLICY_STEP),
            learning_multiplier: self
                .learning_multiplier
                .unwrap_or(DEFAULT_LEARNING_MULTIPLIER),
        };

        let coefficients = [
            ("base_cost", model.base_cost),
            ("highly_feasible_below", model.highly_feasible_below),
            ("challenging_from", model.challenging_from),
            ("policy_horizon_years", model.policy_horizon_years),
            ("policy_step", model.policy_step),
            ("learning_multiplier", model.learning_multiplier),
        ];
        if let Some((name, value)) = coefficients.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PathwayError::Config(format!("{name} must be finite, got {value}")));
        }
        if model.highly_feasible_below > model.challenging_from {
            return Err(PathwayError::Config(format!(
                "thresholds inverted: {} > {}",
                model.highly_feasible_below, model.challenging_from
            )));
        }

        Ok(model)
    }
}
