use serde::Serialize;

use crate::core::{PathwayError, conversions};
use crate::industry::Industry;

/// Link opacity applied to dependency colours.
const LINK_ALPHA: f64 = 0.7;
const SECTOR_NODE_COLOR: &str = "lightblue";
const INDUSTRY_NODE_COLOR: &str = "darkblue";

/// A labelled node of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SankeyNode {
    /// Sector or industry name.
    pub label: String,
    /// CSS colour name.
    pub color: String,
}

/// One flow from a contributing sector into the industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLink {
    /// Index of the sector node.
    pub source: usize,
    /// Index of the industry node, always the last.
    pub target: usize,
    /// Materiality percentage.
    pub value: f64,
    /// `rgba(r, g, b, 0.7)`.
    pub color: String,
    /// HTML tooltip with category, guidance and cost range.
    pub hover: String,
}

/// Sectors on the left, the industry as the single node on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyDiagram {
    /// Sector nodes in dependency order, then the industry.
    pub nodes: Vec<SankeyNode>,
    /// One link per dependency.
    pub links: Vec<SankeyLink>,
}

impl SankeyDiagram {
    /// Build the dependency flows of one industry.
    ///
    /// Node `i` is the `i`-th dependency in authoring order; the last node is the
    /// industry and every link targets it.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::Parse`] if a dependency colour is not a hex colour.
    pub fn for_industry(industry: &Industry) -> Result<Self, PathwayError> {
        let target = industry.sector_dependencies.len();

        let mut nodes: Vec<SankeyNode> = industry
            .sector_names()
            .map(|name| SankeyNode {
                label: name.to_string(),
                color: SECTOR_NODE_COLOR.to_string(),
            })
            .collect();
        nodes.push(SankeyNode {
            label: industry.name.clone(),
            color: INDUSTRY_NODE_COLOR.to_string(),
        });

        let links = industry
            .sector_dependencies
            .iter()
            .enumerate()
            .map(|(source, dep)| -> Result<SankeyLink, PathwayError> {
                Ok(SankeyLink {
                    source,
                    target,
                    value: dep.materiality_pct,
                    color: conversions::hex_to_rgba(&dep.display_color, LINK_ALPHA)?,
                    hover: format!(
                        "<b>{} → {}</b><br>Materiality: {}% of Scope 3 emissions<br>\
                         Scope 3 Category: {}<br>SBTi Guidance: {}<br>IPCC Cost Range: {}<br>",
                        dep.sector,
                        industry.name,
                        dep.materiality_pct,
                        dep.category_label,
                        dep.guidance_status,
                        dep.cost_range,
                    ),
                })
            })
            .collect::<Result<Vec<_>, PathwayError>>()?;

        Ok(Self { nodes, links })
    }

    /// Total flow into the industry node.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.links.iter().fold(0.0, |acc, l| acc + l.value)
    }
}
