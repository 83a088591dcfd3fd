use decarb_pathways::{CostRange, get_industry, views::UncertaintyBar};

use crate::common;

#[test]
fn unparseable_cost_text_uses_fallback_band() {
    let bars = UncertaintyBar::for_industry(get_industry("Financial Services").unwrap());
    assert_eq!(bars.len(), 2);

    assert_eq!(bars[0].sector, "All_Sectors_via_Investments");
    assert!(bars[0].fallback);
    assert_eq!(bars[0].cost, CostRange::FALLBACK);
    assert!(common::approx_eq(bars[0].annotation_x, 110.0));

    assert!(!bars[1].fallback);
    assert_eq!(bars[1].cost, CostRange { min: 0.0, max: 50.0 });
    assert!(common::approx_eq(bars[1].annotation_x, 60.0));
    assert_eq!(bars[1].y, 1);
}

#[test]
fn rows_keep_materiality_and_guidance() {
    let bars = UncertaintyBar::for_industry(get_industry("Chemicals").unwrap());
    let last = bars.last().unwrap();
    assert_eq!(last.sector, "Buildings");
    assert_eq!(last.cost, CostRange { min: 100.0, max: 200.0 });
    assert!(common::approx_eq(last.materiality_pct, 3.0));
    assert_eq!(last.guidance, "Limited");
    assert_eq!(last.y, 4);
}
