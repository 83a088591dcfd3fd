use decarb_pathways::list_industries;

use crate::common;

#[test]
fn free_text_sector_labels_have_no_record() {
    let catalog = common::catalog();
    for label in [
        "Multiple_Enduse",
        "Multiple_Downstream",
        "All_Sectors_via_Investments",
    ] {
        assert!(catalog.sector_for(label).is_none(), "{label} should not join");
    }
}

#[test]
fn ipcc_sector_labels_join() {
    let catalog = common::catalog();
    let power = catalog.sector_for("Power").unwrap();
    assert_eq!(power.description, "Electricity Generation");
}

#[test]
fn every_dependency_either_joins_or_is_tolerated() {
    let catalog = common::catalog();
    let mut unmatched = Vec::new();
    for name in list_industries() {
        for dep in &catalog.get_industry(name).unwrap().sector_dependencies {
            if catalog.sector_for(&dep.sector).is_none() {
                unmatched.push(dep.sector.clone());
            }
        }
    }
    unmatched.sort();
    assert_eq!(
        unmatched,
        vec![
            "All_Sectors_via_Investments",
            "Multiple_Downstream",
            "Multiple_Enduse"
        ]
    );
}
