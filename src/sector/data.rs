//! IPCC AR6 WGIII Chapter 12, Table 12.3 sectoral mitigation costs.

use super::model::{Intervention, MitigationSector};

struct RawSector {
    name: &'static str,
    description: &'static str,
    /// (intervention, cost range)
    interventions: &'static [(&'static str, &'static str)],
    total_potential: &'static str,
}

const SECTORS_RAW: &[RawSector] = &[
    RawSector {
        name: "AFOLU",
        description: "Agriculture, Forestry, Other Land Use",
        interventions: &[
            ("Forest protection", "$0-20/tCO2e"),
            ("Soil carbon sequestration", "$20-50/tCO2e"),
            ("Agricultural CH4/N2O reduction", "$20-50/tCO2e"),
            ("Restoration", "$50-100/tCO2e"),
        ],
        total_potential: "11.4 GtCO2-eq by 2030",
    },
    RawSector {
        name: "Industry",
        description: "Manufacturing, Processing, Materials",
        interventions: &[
            ("Energy efficiency", "$0-20/tCO2e"),
            ("Material efficiency", "$20-50/tCO2e"),
            ("Fuel switching", "$20-100/tCO2e"),
            ("CCS", "$100-200/tCO2e"),
        ],
        total_potential: "5.4 GtCO2-eq by 2030",
    },
    RawSector {
        name: "Transport",
        description: "Logistics, Distribution, Mobility",
        interventions: &[
            ("Fuel efficiency", "$0-20/tCO2e"),
            ("Electric vehicles", "Variable costs"),
            ("Modal shift", "$0-50/tCO2e"),
            ("Biofuels", "$50-100/tCO2e"),
        ],
        total_potential: "3.8 GtCO2-eq by 2030",
    },
    RawSector {
        name: "Buildings",
        description: "Retail, Storage, Facilities",
        interventions: &[
            ("Energy efficiency", "$0-20/tCO2e"),
            ("Building performance", "$20-100/tCO2e"),
            ("Onsite renewables", "$20-50/tCO2e"),
        ],
        total_potential: "2.0 GtCO2-eq by 2030",
    },
    RawSector {
        name: "Power",
        description: "Electricity Generation",
        interventions: &[
            ("Wind energy", "Mostly <$0/tCO2e"),
            ("Solar energy", "Mostly <$0/tCO2e"),
            ("Nuclear", "$0-50/tCO2e"),
            ("Hydropower", "$0-50/tCO2e"),
        ],
        total_potential: "11.0 GtCO2-eq by 2030",
    },
];

pub(crate) fn builtin_sectors() -> Vec<MitigationSector> {
    SECTORS_RAW
        .iter()
        .map(|raw| MitigationSector {
            name: raw.name.to_string(),
            description: raw.description.to_string(),
            interventions: raw
                .interventions
                .iter()
                .map(|&(name, cost)| Intervention {
                    name: name.to_string(),
                    cost_range: cost.to_string(),
                })
                .collect(),
            total_potential: raw.total_potential.to_string(),
        })
        .collect()
}
