use serde::Serialize;

use crate::core::CostRange;
use crate::industry::Industry;

/// Horizontal offset of the materiality annotation past the bar end.
const ANNOTATION_OFFSET: f64 = 10.0;

/// Cost band of one dependency plotted against its materiality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UncertaintyBar {
    pub sector: String,
    /// Row index, in authoring order.
    pub y: usize,
    /// Parsed band, or the `$20-100` fallback when the text has none.
    pub cost: CostRange,
    /// `true` when `cost` is the fallback rather than parsed from the text.
    pub fallback: bool,
    pub cost_range: String,
    pub materiality_pct: f64,
    pub guidance: String,
    pub annotation_x: f64,
}

impl UncertaintyBar {
    #[must_use]
    pub fn for_industry(industry: &Industry) -> Vec<Self> {
        industry
            .sector_dependencies
            .iter()
            .enumerate()
            .map(|(y, dep)| {
                let parsed = dep.cost_band();
                let cost = parsed.unwrap_or(CostRange::FALLBACK);
                Self {
                    sector: dep.sector.clone(),
                    y,
                    cost,
                    fallback: parsed.is_none(),
                    cost_range: dep.cost_range.clone(),
                    materiality_pct: dep.materiality_pct,
                    guidance: dep.guidance_status.to_string(),
                    annotation_x: cost.max + ANNOTATION_OFFSET,
                }
            })
            .collect()
    }
}
