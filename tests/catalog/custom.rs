use decarb_pathways::{Catalog, Intervention, MitigationSector, PathwayError};

use crate::common;

fn sector(name: &str) -> MitigationSector {
    MitigationSector {
        name: name.to_string(),
        description: format!("{name} sector"),
        interventions: vec![Intervention {
            name: "Efficiency".to_string(),
            cost_range: "$0-20/tCO2e".to_string(),
        }],
        total_potential: "1.0 GtCO2-eq by 2030".to_string(),
    }
}

#[test]
fn custom_catalog_resolves_its_own_records() {
    let catalog = Catalog::from_parts(
        vec![common::industry(
            "Steel",
            vec![common::dependency("Industry", 100.0, "Available")],
        )],
        vec![sector("Industry")],
    )
    .unwrap();
    assert_eq!(catalog.list_industries(), vec!["Steel"]);
    assert!(common::approx_eq(catalog.guidance_coverage("Steel").unwrap(), 100.0));
    assert!(catalog.get_industry("Transport OEMs").is_err());
    assert!(catalog.sector_for("Industry").is_some());
}

#[test]
fn duplicate_industry_names_are_rejected() {
    let mut second = common::industry("Steel", vec![common::dependency("Power", 5.0, "None")]);
    second.sample_size = 2;
    let err = Catalog::from_parts(
        vec![
            common::industry("Steel", vec![common::dependency("Industry", 90.0, "Limited")]),
            common::industry("Cement", Vec::new()),
            second,
        ],
        Vec::new(),
    )
    .unwrap_err();
    match err {
        PathwayError::Config(msg) => assert!(msg.contains("\"Steel\""), "{msg}"),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn duplicate_sector_names_are_rejected() {
    let err = Catalog::from_parts(
        Vec::new(),
        vec![sector("Power"), sector("Industry"), sector("Power")],
    )
    .unwrap_err();
    assert!(matches!(err, PathwayError::Config(_)));
    assert_eq!(
        err.to_string(),
        "invalid configuration: duplicate sector name: \"Power\""
    );
}

#[test]
fn same_name_across_industry_and_sector_is_allowed() {
    let catalog = Catalog::from_parts(
        vec![common::industry("Power", Vec::new())],
        vec![sector("Power")],
    )
    .unwrap();
    assert_eq!(catalog.list_industries(), vec!["Power"]);
    assert_eq!(catalog.list_sectors(), vec!["Power"]);
}
