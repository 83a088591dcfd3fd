use serde::Serialize;

use crate::industry::Industry;

/// Label of the slice with industry-specific guidance.
pub const COVERED_LABEL: &str = "Has Industry-Specific Guidance";
/// Label of the slice without it.
pub const GAP_LABEL: &str = "Guidance Gap";
const COVERED_COLOR: &str = "#4CAF50";
const GAP_COLOR: &str = "#F44336";

/// One slice of the coverage pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSlice {
    /// [`COVERED_LABEL`] or [`GAP_LABEL`].
    pub category: String,
    /// Share of materiality, in percent.
    pub percentage: f64,
    /// Hex fill colour.
    pub color: String,
}

/// Two-slice pie: materiality with available guidance against the remainder of 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSplit {
    /// Industry name.
    pub industry: String,
    /// Covered first, then the gap.
    pub slices: [CoverageSlice; 2],
}

impl CoverageSplit {
    #[must_use]
    pub fn for_industry(industry: &Industry) -> Self {
        let covered = industry.guidance_coverage();
        Self {
            industry: industry.name.clone(),
            slices: [
                CoverageSlice {
                    category: COVERED_LABEL.to_string(),
                    percentage: covered,
                    color: COVERED_COLOR.to_string(),
                },
                CoverageSlice {
                    category: GAP_LABEL.to_string(),
                    percentage: industry.guidance_gap(),
                    color: GAP_COLOR.to_string(),
                },
            ],
        }
    }

    #[must_use]
    pub fn covered(&self) -> f64 {
        self.slices[0].percentage
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.slices[1].percentage
    }
}

/// Narrative panel for the selected industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryInsight {
    /// See [`Industry::key_challenge`].
    pub key_challenge: String,
    /// Number of disclosing organizations.
    pub sample_size: u32,
    /// See [`Industry::main_gap`].
    pub main_gap: String,
}

impl IndustryInsight {
    #[must_use]
    pub fn for_industry(industry: &Industry) -> Self {
        Self {
            key_challenge: industry.key_challenge.clone(),
            sample_size: industry.sample_size,
            main_gap: industry.main_gap.clone(),
        }
    }
}
