//! Example exporting the dashboard tables as Polars `DataFrame`s.
//!
//! Run with: cargo run --example 03_polars_tables --features dataframe

use decarb_pathways::{
    Catalog, ToDataFrame,
    views::{CostRow, GuidanceRow, SectorPotential},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();

    println!("=== Guidance coverage: Chemicals ===");
    let guidance = GuidanceRow::for_industry(catalog.get_industry("Chemicals")?);
    println!("{}", guidance.to_dataframe()?);

    println!("\n=== IPCC AR6 sectoral mitigation costs ===");
    let costs = CostRow::for_catalog(catalog);
    println!("{}", costs.to_dataframe()?);

    println!("\n=== Sectoral mitigation potential ===");
    let potentials = SectorPotential::for_catalog(catalog)?;
    println!("{}", potentials.to_dataframe()?);

    Ok(())
}
