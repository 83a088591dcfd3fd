//! Centralized constants for the default cost model and slider bounds.

/// Reference abatement cost before any adjustment.
pub(crate) const DEFAULT_BASE_COST: f64 = 100.0;

/// Adjusted costs strictly below this are "Highly Feasible".
pub(crate) const DEFAULT_HIGHLY_FEASIBLE_BELOW: f64 = 80.0;

/// Adjusted costs at or above this are "Challenging".
pub(crate) const DEFAULT_CHALLENGING_FROM: f64 = 120.0;

/// Policy timeline (years) at which the policy factor is neutral.
pub(crate) const DEFAULT_POLICY_HORIZON_YEARS: f64 = 6.0;

/// Policy factor increment per year short of the horizon.
pub(crate) const DEFAULT_POLICY_STEP: f64 = 0.1;

/// Multiplier applied to the learning rate fraction.
pub(crate) const DEFAULT_LEARNING_MULTIPLIER: f64 = 2.0;

/// Carbon price at which the carbon factor is neutral.
pub(crate) const CARBON_PRICE_REFERENCE: f64 = 100.0;
