#![allow(dead_code)]

use decarb_pathways::{Catalog, Dependency, GuidanceStatus, Industry};

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

/// A hand-built dependency for synthetic industries.
pub fn dependency(sector: &str, pct: f64, guidance: &str) -> Dependency {
    Dependency {
        sector: sector.to_string(),
        materiality_pct: pct,
        guidance_status: GuidanceStatus::from(guidance),
        cost_range: "$0-50/tCO2e".to_string(),
        category_label: "C1: Synthetic".to_string(),
        display_color: "#2E7D32".to_string(),
    }
}

pub fn industry(name: &str, deps: Vec<Dependency>) -> Industry {
    Industry {
        name: name.to_string(),
        scope3_share: 50.0,
        sector_dependencies: deps,
        key_challenge: "synthetic challenge".to_string(),
        sample_size: 1,
        main_gap: "synthetic gap".to_string(),
    }
}
