//! Sweeps the carbon price slider and prints the adjusted abatement cost.
//!
//! Run with: cargo run --example 02_sensitivity_sweep

use decarb_pathways::{SensitivityBuilder, SliderBounds};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bounds = SliderBounds::CARBON_PRICE;

    println!("--- Carbon price sweep (learning 15%, policy in 4 years) ---");
    let mut price = bounds.min;
    while price <= bounds.max {
        let r = SensitivityBuilder::new().carbon_price(price).calculate()?;
        println!(
            "  ${price:>5.0}/t  ->  {:>7.2}  {}",
            r.adjusted_cost, r.feasibility
        );
        price += 25.0;
    }
    println!();

    println!("--- Policy timeline sweep (carbon $100/t, learning 15%) ---");
    for years in [2.0, 3.0, 4.0, 5.0, 6.0] {
        let r = SensitivityBuilder::new()
            .policy_timeline_years(years)
            .calculate()?;
        println!(
            "  {years} years  ->  policy factor {:.1}, cost {:>7.2}  {}",
            r.policy_factor, r.adjusted_cost, r.feasibility
        );
    }
    println!();

    // A zero carbon price never reaches the formula.
    match SensitivityBuilder::new().carbon_price(0.0).calculate() {
        Ok(r) => println!("unexpected result: {}", r.adjusted_cost),
        Err(e) => println!("carbon price 0: {e}"),
    }

    Ok(())
}
