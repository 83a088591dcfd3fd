//! Prints the guidance picture of every industry in the builtin catalog.
//!
//! Run with: cargo run --example 01_dashboard_summary --features tracing-subscriber

use decarb_pathways::{Catalog, Dashboard, SensitivityInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::builtin();

    for name in catalog.list_industries() {
        let dash = Dashboard::builder(catalog, name)
            .sensitivity(SensitivityInputs::default())
            .build()?;

        println!("--- {} ---", dash.industry);
        println!("Scope 3 share: {}%", dash.scope3_share);
        println!(
            "Guidance coverage: {}% (gap {}%) across {} pathways",
            dash.coverage.covered(),
            dash.coverage.gap(),
            dash.pathway_count
        );
        for row in &dash.guidance_table {
            let joined = if catalog.sector_for(&row.sector).is_some() {
                ""
            } else {
                " (no IPCC sector record)"
            };
            println!(
                "  {} {:<28} {:>6}  {:<15} {}{}",
                row.status.glyph(),
                row.sector,
                row.materiality,
                row.guidance,
                row.cost_range,
                joined
            );
        }
        println!("Key challenge: {}", dash.insight.key_challenge);
        println!("Sample size: {} companies (CDP 2021)", dash.insight.sample_size);
        println!("Main gap: {}", dash.insight.main_gap);
        println!();
    }

    println!("--- IPCC AR6 sectoral potential (2030) ---");
    for sector in catalog.sectors() {
        println!("  {:<10} {:>5.1} Gt  {}", sector.name, sector.potential_gt()?, sector.description);
    }

    Ok(())
}
