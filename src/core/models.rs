use serde::Serialize;

/* ----- COST RANGES (shared by industry/, sector/, views/) ----- */

/// A numeric abatement-cost band in currency per tonne of CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRange {
    /// Lower bound of the band.
    pub min: f64,
    /// Upper bound of the band.
    pub max: f64,
}

impl CostRange {
    /// Band assumed for cost texts that carry no parseable range.
    pub const FALLBACK: Self = Self {
        min: 20.0,
        max: 100.0,
    };

    /// Parses a `"$min-max/tCO2e"` range.
    ///
    /// Returns `None` unless the text contains both `$` and `-` and the first two
    /// dash-separated parts are numbers. Free-text qualifiers such as
    /// `"Variable by sector"` or `"Mostly <$0/tCO2e"` yield `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        crate::core::conversions::parse_cost_range(text)
    }

    /// Like [`CostRange::parse`], but substitutes [`CostRange::FALLBACK`] for unparseable text.
    #[must_use]
    pub fn parse_or_fallback(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::FALLBACK)
    }

    /// Width of the band.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/* ----- GUIDANCE STATUS (industry dependencies) ----- */

/// Three-level traffic light summarizing a guidance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusIndicator {
    /// Industry-specific guidance is available.
    Covered,
    /// Only generic or very recent guidance exists.
    Partial,
    /// No usable guidance.
    Missing,
}

impl StatusIndicator {
    /// The glyph shown next to the label in tables.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Covered => "✅",
            Self::Partial => "⚠️",
            Self::Missing => "❌",
        }
    }
}
