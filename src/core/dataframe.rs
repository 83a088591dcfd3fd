use polars::prelude::*;

use crate::views::{CostRow, GuidanceRow, SectorPotential, UncertaintyBar};

/// Trait for converting view tables into Polars DataFrames.
///
/// This trait provides a consistent interface for handing the tabular views of this
/// crate to Polars for further analysis or display.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized,
    {
        let columns = Self::schema()?
            .into_iter()
            .map(|(name, dtype)| Column::new_empty(name.into(), &dtype))
            .collect();
        DataFrame::new(columns)
    }

    /// Returns the column names and types of the frame.
    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>>
    where
        Self: Sized;
}

impl ToDataFrame for Vec<GuidanceRow> {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let sector: Vec<&str> = self.iter().map(|r| r.sector.as_str()).collect();
        let materiality: Vec<&str> = self.iter().map(|r| r.materiality.as_str()).collect();
        let guidance: Vec<&str> = self.iter().map(|r| r.guidance.as_str()).collect();
        let cost: Vec<&str> = self.iter().map(|r| r.cost_range.as_str()).collect();
        let status: Vec<&str> = self.iter().map(|r| r.status.glyph()).collect();
        DataFrame::new(vec![
            Column::new("IPCC Sector".into(), sector),
            Column::new("Materiality (% Scope 3)".into(), materiality),
            Column::new("SBTi Guidance".into(), guidance),
            Column::new("IPCC Cost Range".into(), cost),
            Column::new("Status".into(), status),
        ])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("IPCC Sector", DataType::String),
            ("Materiality (% Scope 3)", DataType::String),
            ("SBTi Guidance", DataType::String),
            ("IPCC Cost Range", DataType::String),
            ("Status", DataType::String),
        ])
    }
}

impl ToDataFrame for Vec<CostRow> {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let sector: Vec<&str> = self.iter().map(|r| r.sector.as_str()).collect();
        let intervention: Vec<&str> = self.iter().map(|r| r.intervention.as_str()).collect();
        let cost: Vec<&str> = self.iter().map(|r| r.cost_range.as_str()).collect();
        let potential: Vec<&str> = self.iter().map(|r| r.potential.as_str()).collect();
        DataFrame::new(vec![
            Column::new("IPCC Sector".into(), sector),
            Column::new("Intervention".into(), intervention),
            Column::new("Cost Range".into(), cost),
            Column::new("Potential".into(), potential),
        ])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("IPCC Sector", DataType::String),
            ("Intervention", DataType::String),
            ("Cost Range", DataType::String),
            ("Potential", DataType::String),
        ])
    }
}

impl ToDataFrame for Vec<SectorPotential> {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let sector: Vec<&str> = self.iter().map(|r| r.sector.as_str()).collect();
        let potential: Vec<f64> = self.iter().map(|r| r.potential).collect();
        DataFrame::new(vec![
            Column::new("IPCC Sector".into(), sector),
            Column::new("Potential (GtCO2-eq)".into(), potential),
        ])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("IPCC Sector", DataType::String),
            ("Potential (GtCO2-eq)", DataType::Float64),
        ])
    }
}

impl ToDataFrame for Vec<UncertaintyBar> {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let sector: Vec<&str> = self.iter().map(|r| r.sector.as_str()).collect();
        let min: Vec<f64> = self.iter().map(|r| r.cost.min).collect();
        let max: Vec<f64> = self.iter().map(|r| r.cost.max).collect();
        let materiality: Vec<f64> = self.iter().map(|r| r.materiality_pct).collect();
        let fallback: Vec<bool> = self.iter().map(|r| r.fallback).collect();
        DataFrame::new(vec![
            Column::new("Sector".into(), sector),
            Column::new("Min Cost".into(), min),
            Column::new("Max Cost".into(), max),
            Column::new("Materiality".into(), materiality),
            Column::new("Fallback".into(), fallback),
        ])
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(vec![
            ("Sector", DataType::String),
            ("Min Cost", DataType::Float64),
            ("Max Cost", DataType::Float64),
            ("Materiality", DataType::Float64),
            ("Fallback", DataType::Boolean),
        ])
    }
}
