use decarb_pathways::{
    Feasibility, PathwayError, SensitivityBuilder, SensitivityInputs, adjusted_cost,
};

use crate::common;

fn reference(carbon_price: f64, tech_learning_rate: f64, policy_timeline_years: f64) -> f64 {
    let base_cost = 100.0;
    let policy_factor = 1.0 + (6.0 - policy_timeline_years) * 0.1;
    let tech_factor = 1.0 - (tech_learning_rate / 100.0) * 2.0;
    let carbon_factor = carbon_price / 100.0;
    base_cost * policy_factor * tech_factor / carbon_factor
}

#[test]
fn midpoint_sliders_are_moderately_feasible() {
    let r = adjusted_cost(100.0, 15.0, 4.0).unwrap();
    assert!(common::approx_eq(r.policy_factor, 1.2));
    assert!(common::approx_eq(r.tech_factor, 0.7));
    assert!(common::approx_eq(r.carbon_factor, 1.0));
    assert!(common::approx_eq(r.adjusted_cost, 84.0));
    assert_eq!(r.feasibility, Feasibility::ModeratelyFeasible);
    assert_eq!(r.feasibility.to_string(), "Moderately Feasible");
}

#[test]
fn matches_reference_formula_bit_for_bit() {
    for &(c, t, p) in &[
        (100.0, 15.0, 4.0),
        (50.0, 5.0, 2.0),
        (150.0, 25.0, 6.0),
        (73.0, 11.5, 3.25),
        (128.0, 22.0, 5.0),
    ] {
        let got = adjusted_cost(c, t, p).unwrap().adjusted_cost;
        assert_eq!(got.to_bits(), reference(c, t, p).to_bits(), "inputs ({c}, {t}, {p})");
    }
}

#[test]
fn slider_extremes() {
    let cheap = adjusted_cost(150.0, 25.0, 6.0).unwrap();
    assert!(common::approx_eq(cheap.adjusted_cost, 100.0 / 3.0));
    assert_eq!(cheap.feasibility, Feasibility::HighlyFeasible);

    let dear = adjusted_cost(50.0, 5.0, 2.0).unwrap();
    assert!(common::approx_eq(dear.adjusted_cost, 252.0));
    assert_eq!(dear.feasibility, Feasibility::Challenging);
}

#[test]
fn zero_carbon_price_is_a_division_error() {
    let err = adjusted_cost(0.0, 15.0, 4.0).unwrap_err();
    assert!(matches!(err, PathwayError::DivisionByZero { carbon_price } if carbon_price == 0.0));

    let neg_zero = SensitivityBuilder::new().carbon_price(-0.0).calculate();
    assert!(matches!(neg_zero, Err(PathwayError::DivisionByZero { .. })));
}

#[test]
fn subnormal_carbon_price_is_not_a_division_error() {
    // The factor underflows to zero here, but the price itself is non-zero.
    let r = adjusted_cost(5e-324, 15.0, 4.0).unwrap();
    assert_eq!(r.carbon_factor, 0.0);
    assert_eq!(r.adjusted_cost, f64::INFINITY);
    assert_eq!(r.feasibility, Feasibility::Challenging);
}

#[test]
fn overflowing_quotient_is_infinite_and_challenging() {
    let r = adjusted_cost(1e-320, 15.0, 4.0).unwrap();
    assert!(r.carbon_factor > 0.0);
    assert_eq!(r.adjusted_cost, f64::INFINITY);
    assert_eq!(r.feasibility, Feasibility::Challenging);
}

#[test]
fn full_learning_rate_yields_negative_cost_classified_highly_feasible() {
    let r = adjusted_cost(100.0, 100.0, 4.0).unwrap();
    assert!(common::approx_eq(r.tech_factor, -1.0));
    assert!(common::approx_eq(r.adjusted_cost, -120.0));
    assert_eq!(r.feasibility, Feasibility::HighlyFeasible);
}

#[test]
fn builder_defaults_to_slider_midpoints() {
    let r = SensitivityBuilder::new().calculate().unwrap();
    assert_eq!(r.inputs, SensitivityInputs::default());
    assert!(common::approx_eq(r.inputs.carbon_price, 100.0));
    assert!(common::approx_eq(r.inputs.tech_learning_rate, 15.0));
    assert!(common::approx_eq(r.inputs.policy_timeline_years, 4.0));
    assert!(common::approx_eq(r.adjusted_cost, 84.0));
}

#[test]
fn builder_inputs_are_recorded() {
    let r = SensitivityBuilder::new()
        .carbon_price(120.0)
        .tech_learning_rate(10.0)
        .policy_timeline_years(3.0)
        .calculate()
        .unwrap();
    assert!(common::approx_eq(r.inputs.carbon_price, 120.0));
    assert!(common::approx_eq(r.base_cost, 100.0));
    assert_eq!(r.adjusted_cost.to_bits(), reference(120.0, 10.0, 3.0).to_bits());
}

#[test]
fn result_serializes_with_display_labels() {
    let r = adjusted_cost(100.0, 15.0, 4.0).unwrap();
    let json = serde_json::to_value(r).unwrap();
    assert_eq!(json["feasibility"], "Moderately Feasible");
    assert_eq!(json["inputs"]["carbon_price"], 100.0);
}
