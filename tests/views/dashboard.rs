use decarb_pathways::{
    Dashboard, Feasibility, PathwayError, SensitivityInputs, SensitivityModel,
};

use crate::common;

#[test]
fn dashboard_for_selected_industry() {
    let dash = Dashboard::builder(common::catalog(), "Food, Beverage & Tobacco")
        .build()
        .unwrap();
    assert_eq!(dash.industry, "Food, Beverage & Tobacco");
    assert!(common::approx_eq(dash.scope3_share, 67.0));
    assert_eq!(dash.pathway_count, 5);
    assert_eq!(dash.sankey.links.len(), 5);
    assert_eq!(dash.guidance_table.len(), 5);
    assert!(common::approx_eq(dash.coverage.covered(), 55.0));
    assert_eq!(dash.insight.sample_size, 162);
    assert_eq!(dash.cost_table.len(), 19);
    assert_eq!(dash.sector_potentials.len(), 5);
    assert_eq!(dash.uncertainty.len(), 5);
    assert!(dash.sensitivity.is_none());
}

#[test]
fn dashboard_with_sensitivity_panel() {
    let dash = Dashboard::builder(common::catalog(), "Transport OEMs")
        .sensitivity(SensitivityInputs {
            carbon_price: 100.0,
            tech_learning_rate: 15.0,
            policy_timeline_years: 4.0,
        })
        .build()
        .unwrap();
    let s = dash.sensitivity.unwrap();
    assert!(common::approx_eq(s.adjusted_cost, 84.0));
    assert_eq!(s.feasibility, Feasibility::ModeratelyFeasible);
}

#[test]
fn dashboard_uses_custom_model() {
    let model = SensitivityModel::builder().thresholds(90.0, 150.0).build().unwrap();
    let dash = Dashboard::builder(common::catalog(), "Chemicals")
        .model(model)
        .sensitivity(SensitivityInputs::default())
        .build()
        .unwrap();
    assert_eq!(
        dash.sensitivity.unwrap().feasibility,
        Feasibility::HighlyFeasible
    );
}

#[test]
fn unknown_industry_fails() {
    let err = Dashboard::builder(common::catalog(), "Technology")
        .build()
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn zero_carbon_price_fails_whole_snapshot() {
    let err = Dashboard::builder(common::catalog(), "Chemicals")
        .sensitivity(SensitivityInputs {
            carbon_price: 0.0,
            ..SensitivityInputs::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, PathwayError::DivisionByZero { .. }));
}

#[test]
fn json_snapshot_has_stable_keys() {
    let dash = Dashboard::builder(common::catalog(), "Capital Goods")
        .build()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&dash.to_json().unwrap()).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "industry",
        "scope3_share",
        "pathway_count",
        "sankey",
        "guidance_table",
        "coverage",
        "insight",
        "cost_table",
        "sector_potentials",
        "uncertainty",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("sensitivity"));
    assert_eq!(value["guidance_table"][1]["sector"], "Multiple_Enduse");
    assert_eq!(value["guidance_table"][1]["status"], "Missing");
    assert_eq!(value["sankey"]["links"][1]["value"], 91.0);

    let pretty = dash.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
}
