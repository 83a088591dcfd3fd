//! Industry emission profiles from CDP 2021 disclosures, with IPCC AR6 cost ranges.

use super::model::{Dependency, GuidanceStatus, Industry};

/// (sector, materiality %, guidance, cost range, Scope-3 category, colour)
type RawDependency = (&'static str, f64, &'static str, &'static str, &'static str, &'static str);

struct RawIndustry {
    name: &'static str,
    scope3_share: f64,
    dependencies: &'static [RawDependency],
    key_challenge: &'static str,
    sample_size: u32,
    main_gap: &'static str,
}

const INDUSTRIES_RAW: &[RawIndustry] = &[
    RawIndustry {
        name: "Food, Beverage & Tobacco",
        scope3_share: 67.0,
        dependencies: &[
            ("AFOLU", 40.0, "Available", "$0-50/tCO2e", "C1: Purchased goods (agricultural)", "#2E7D32"),
            ("Industry", 20.0, "Limited", "$20-100/tCO2e", "C1: Purchased goods (packaging)", "#FF5722"),
            ("Transport", 15.0, "Generic only", "$0-50/tCO2e", "C4+C9: Transport", "#FF9800"),
            ("Buildings", 10.0, "None", "$20-100/tCO2e", "C13: Retail/storage", "#F44336"),
            ("Power", 15.0, "Available", "$0-20/tCO2e", "C2: Processing facilities", "#2E7D32"),
        ],
        key_challenge: "Even with FLAG guidance, 60% of F&B emissions lack industry-specific pathways",
        sample_size: 162,
        main_gap: "No methodology for packaging, retail, and processing dependencies",
    },
    RawIndustry {
        name: "Transport OEMs",
        scope3_share: 84.0,
        dependencies: &[
            ("Industry", 11.0, "Generic only", "$20-100/tCO2e", "C1: Manufacturing", "#FF9800"),
            ("Transport", 86.0, "Recent (2024)", "$0-50/tCO2e", "C11: Use phase", "#4CAF50"),
            ("Power", 3.0, "Available", "$0-20/tCO2e", "C2: Manufacturing facilities", "#2E7D32"),
        ],
        key_challenge: "New Land Transport guidance covers use-phase, but manufacturing gaps remain",
        sample_size: 48,
        main_gap: "No methodology linking automotive supply chain complexity to science-based targets",
    },
    RawIndustry {
        name: "Capital Goods",
        scope3_share: 90.0,
        dependencies: &[
            ("Industry", 6.0, "Generic only", "$20-100/tCO2e", "C1: Manufacturing", "#FF9800"),
            ("Multiple_Enduse", 91.0, "None", "$50-200/tCO2e", "C11: Use across all sectors", "#F44336"),
            ("Power", 3.0, "Available", "$0-20/tCO2e", "C2: Manufacturing", "#2E7D32"),
        ],
        key_challenge: "91% of emissions have no methodology to link equipment efficiency to sectoral pathways",
        sample_size: 166,
        main_gap: "No framework for translating product improvements into science-based targets",
    },
    RawIndustry {
        name: "Financial Services",
        scope3_share: 99.98,
        dependencies: &[
            ("All_Sectors_via_Investments", 99.0, "PCAF available", "Variable by sector", "C15: Financed emissions", "#9C27B0"),
            ("Buildings", 1.0, "Available", "$0-50/tCO2e", "C13: Real estate portfolio", "#2E7D32"),
        ],
        key_challenge: "Portfolio emissions span ALL sectors but no methodology links PCAF to sectoral pathways",
        sample_size: 377,
        main_gap: "Financed emissions 700x larger than direct, but sectoral investment optimization lacks science-based framework",
    },
    RawIndustry {
        name: "Chemicals",
        scope3_share: 44.0,
        dependencies: &[
            ("Industry", 58.0, "Limited", "$20-100/tCO2e", "C1: Raw materials", "#FF5722"),
            ("Multiple_Downstream", 19.0, "None", "$50-200/tCO2e", "C11: Use in other industries", "#F44336"),
            ("Transport", 12.0, "Generic only", "$0-50/tCO2e", "C4+C9: Transport", "#FF9800"),
            ("Power", 8.0, "Available", "$0-20/tCO2e", "C2: Production facilities", "#2E7D32"),
            ("Buildings", 3.0, "Limited", "$100-200/tCO2e", "C12: End-of-life", "#FF5722"),
        ],
        key_challenge: "Intermediate products create unknown downstream use-phase across multiple industries",
        sample_size: 146,
        main_gap: "No methodology for tracking chemical products through complex multi-industry value chains",
    },
];

pub(crate) fn builtin_industries() -> Vec<Industry> {
    INDUSTRIES_RAW
        .iter()
        .map(|raw| Industry {
            name: raw.name.to_string(),
            scope3_share: raw.scope3_share,
            sector_dependencies: raw
                .dependencies
                .iter()
                .map(|&(sector, pct, guidance, cost, category, color)| Dependency {
                    sector: sector.to_string(),
                    materiality_pct: pct,
                    guidance_status: GuidanceStatus::from(guidance),
                    cost_range: cost.to_string(),
                    category_label: category.to_string(),
                    display_color: color.to_string(),
                })
                .collect(),
            key_challenge: raw.key_challenge.to_string(),
            sample_size: raw.sample_size,
            main_gap: raw.main_gap.to_string(),
        })
        .collect()
}
