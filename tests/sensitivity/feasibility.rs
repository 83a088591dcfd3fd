use decarb_pathways::Feasibility;

#[test]
fn lower_threshold_is_inclusive_for_moderate_band() {
    assert_eq!(Feasibility::classify(80.0), Feasibility::ModeratelyFeasible);
    assert_eq!(Feasibility::classify(79.999_999), Feasibility::HighlyFeasible);
}

#[test]
fn upper_threshold_is_inclusive_for_challenging_band() {
    assert_eq!(Feasibility::classify(120.0), Feasibility::Challenging);
    assert_eq!(Feasibility::classify(119.999_999), Feasibility::ModeratelyFeasible);
}

#[test]
fn negative_and_extreme_costs() {
    assert_eq!(Feasibility::classify(-500.0), Feasibility::HighlyFeasible);
    assert_eq!(Feasibility::classify(f64::INFINITY), Feasibility::Challenging);
    assert_eq!(Feasibility::classify(f64::NEG_INFINITY), Feasibility::HighlyFeasible);
    assert_eq!(Feasibility::classify(f64::NAN), Feasibility::Challenging);
}

#[test]
fn labels() {
    assert_eq!(Feasibility::HighlyFeasible.label(), "Highly Feasible");
    assert_eq!(Feasibility::ModeratelyFeasible.label(), "Moderately Feasible");
    assert_eq!(Feasibility::Challenging.to_string(), "Challenging");
}
