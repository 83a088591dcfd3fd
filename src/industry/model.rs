use std::fmt;

use serde::Serialize;

use crate::core::{CostRange, StatusIndicator};

/// Whether a science-aligned target methodology exists for a dependency.
///
/// This is an open label set ("Available", "Limited", "Generic only", "None",
/// "Recent (2024)", "PCAF available", ...). Any label is valid; only
/// [`GuidanceStatus::AVAILABLE`] has meaning for coverage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GuidanceStatus(String);

impl GuidanceStatus {
    /// The one label that counts towards guidance coverage.
    pub const AVAILABLE: &'static str = "Available";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive match on `"Available"`.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.0 == Self::AVAILABLE
    }

    /// Summarize the label as a traffic light.
    ///
    /// "Available" is covered; labels mentioning "Generic" or "Recent" are partial;
    /// everything else, "PCAF available" and "Limited" included, is missing.
    #[must_use]
    pub fn indicator(&self) -> StatusIndicator {
        if self.is_available() {
            StatusIndicator::Covered
        } else if self.0.contains("Generic") || self.0.contains("Recent") {
            StatusIndicator::Partial
        } else {
            StatusIndicator::Missing
        }
    }
}

impl fmt::Display for GuidanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuidanceStatus {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GuidanceStatus {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for GuidanceStatus {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GuidanceStatus {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One contributing sector in an industry's indirect-emissions breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    /// Contributing sector. Usually an IPCC mitigation sector, but free-text labels
    /// such as `Multiple_Enduse` occur and have no sector record.
    pub sector: String,
    /// Share of the industry's Scope-3 emissions, as disclosed. Not normalized.
    pub materiality_pct: f64,
    pub guidance_status: GuidanceStatus,
    /// `"$min-max/tCO2e"` or a free-text qualifier.
    pub cost_range: String,
    /// Scope-3 category, e.g. `"C11: Use phase"`.
    pub category_label: String,
    /// Hex colour used by charts.
    pub display_color: String,
}

impl Dependency {
    /// The parsed cost band, if the text holds one.
    #[must_use]
    pub fn cost_band(&self) -> Option<CostRange> {
        CostRange::parse(&self.cost_range)
    }
}

/// An industry's emission profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Percentage (0-100) of total emissions from value-chain sources.
    pub scope3_share: f64,
    /// Dependencies in authoring order, unique by sector.
    pub sector_dependencies: Vec<Dependency>,
    /// The main decarbonization obstacle reported for the industry.
    pub key_challenge: String,
    /// Number of disclosing organizations behind the figures.
    pub sample_size: u32,
    /// Where sector guidance falls short for the industry.
    pub main_gap: String,
}

impl Industry {
    /// Look up one dependency by its sector name.
    #[must_use]
    pub fn dependency(&self, sector: &str) -> Option<&Dependency> {
        self.sector_dependencies.iter().find(|d| d.sector == sector)
    }

    /// Sector names in authoring order.
    pub fn sector_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sector_dependencies.iter().map(|d| d.sector.as_str())
    }

    /// How many sectoral pathways a company in this industry must reconcile.
    #[must_use]
    pub fn pathway_count(&self) -> usize {
        self.sector_dependencies.len()
    }

    /// Sum of materiality over dependencies whose guidance is exactly "Available".
    ///
    /// Returns 0 when none match. The total across all dependencies is not checked
    /// against 100.
    #[must_use]
    pub fn guidance_coverage(&self) -> f64 {
        self.sector_dependencies
            .iter()
            .filter(|d| d.guidance_status.is_available())
            .fold(0.0, |acc, d| acc + d.materiality_pct)
    }

    /// `100 - guidance_coverage()`, unclamped.
    #[must_use]
    pub fn guidance_gap(&self) -> f64 {
        100.0 - self.guidance_coverage()
    }

    /// Sum of all materiality percentages, as authored.
    #[must_use]
    pub fn total_materiality(&self) -> f64 {
        self.sector_dependencies
            .iter()
            .fold(0.0, |acc, d| acc + d.materiality_pct)
    }
}
