//! Read-only lookups over the industry and mitigation-sector tables.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use crate::core::PathwayError;
use crate::industry::{self, Industry};
use crate::sector::{self, MitigationSector};

/// Built once on first access and never mutated afterwards.
static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::indexed(
        industry::data::builtin_industries(),
        sector::data::builtin_sectors(),
    )
});

/// An immutable set of industries and mitigation sectors with name lookups.
///
/// Most callers want [`Catalog::builtin`]. Lookups are exact, case-sensitive
/// matches on the display name; unknown names fail with
/// [`PathwayError::NotFound`] and no default record is substituted.
///
/// # Example
///
/// ```
/// use decarb_pathways::Catalog;
///
/// let catalog = Catalog::builtin();
/// let oems = catalog.get_industry("Transport OEMs")?;
/// assert_eq!(oems.scope3_share, 84.0);
/// assert_eq!(catalog.guidance_coverage("Financial Services")?, 1.0);
/// # Ok::<(), decarb_pathways::PathwayError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    industries: Vec<Industry>,
    sectors: Vec<MitigationSector>,
    industry_index: HashMap<String, usize>,
    sector_index: HashMap<String, usize>,
}

impl Catalog {
    /// The process-wide catalog of CDP industry profiles and IPCC AR6 sectors.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Assemble a catalog from records.
    ///
    /// Records are taken as given: materiality percentages are not normalized and
    /// dependency sector names need not match a sector.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::Config`] if two industries or two sectors share a name.
    pub fn from_parts(
        industries: Vec<Industry>,
        sectors: Vec<MitigationSector>,
    ) -> Result<Self, PathwayError> {
        if let Some(name) = first_duplicate(industries.iter().map(|i| i.name.as_str())) {
            return Err(PathwayError::Config(format!("duplicate industry name: {name:?}")));
        }
        if let Some(name) = first_duplicate(sectors.iter().map(|s| s.name.as_str())) {
            return Err(PathwayError::Config(format!("duplicate sector name: {name:?}")));
        }
        Ok(Self::indexed(industries, sectors))
    }

    /// Build the name indexes. Names must already be unique.
    fn indexed(industries: Vec<Industry>, sectors: Vec<MitigationSector>) -> Self {
        let industry_index = industries
            .iter()
            .enumerate()
            .map(|(i, ind)| (ind.name.clone(), i))
            .collect();
        let sector_index = sectors
            .iter()
            .enumerate()
            .map(|(i, sec)| (sec.name.clone(), i))
            .collect();
        Self {
            industries,
            sectors,
            industry_index,
            sector_index,
        }
    }

    /* ---------------- Industries ---------------- */

    /// Industry names in authoring order.
    #[must_use]
    pub fn list_industries(&self) -> Vec<&str> {
        self.industries.iter().map(|i| i.name.as_str()).collect()
    }

    /// All industry records in authoring order.
    pub fn industries(&self) -> impl Iterator<Item = &Industry> + '_ {
        self.industries.iter()
    }

    /// Looks up an industry by name.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::NotFound`] if `id` is not a known industry.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self), err))]
    pub fn get_industry(&self, id: &str) -> Result<&Industry, PathwayError> {
        self.industry_index
            .get(id)
            .map(|&i| &self.industries[i])
            .ok_or_else(|| PathwayError::industry_not_found(id))
    }

    /// Sum of materiality over the industry's dependencies whose guidance is "Available".
    ///
    /// Returns 0 when no dependency has available guidance. The result is not
    /// bounded to `[0, 100]`: disclosed breakdowns need not sum to 100.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::NotFound`] if `id` is not a known industry.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self), err))]
    pub fn guidance_coverage(&self, id: &str) -> Result<f64, PathwayError> {
        Ok(self.get_industry(id)?.guidance_coverage())
    }

    /// `100 - guidance_coverage(id)`.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::NotFound`] if `id` is not a known industry.
    pub fn guidance_gap(&self, id: &str) -> Result<f64, PathwayError> {
        Ok(self.get_industry(id)?.guidance_gap())
    }

    /* ---------------- Sectors ---------------- */

    /// Mitigation sector names in authoring order.
    #[must_use]
    pub fn list_sectors(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sectors(&self) -> impl Iterator<Item = &MitigationSector> + '_ {
        self.sectors.iter()
    }

    /// Looks up a mitigation sector by name.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::NotFound`] if `id` is not a known sector.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self), err))]
    pub fn get_sector(&self, id: &str) -> Result<&MitigationSector, PathwayError> {
        self.sector_index
            .get(id)
            .map(|&i| &self.sectors[i])
            .ok_or_else(|| PathwayError::sector_not_found(id))
    }

    /// The sector record behind a dependency's sector name, if one exists.
    ///
    /// Free-text dependency labels such as `Multiple_Enduse` have no record and
    /// yield `None`.
    #[must_use]
    pub fn sector_for(&self, dependency_sector: &str) -> Option<&MitigationSector> {
        self.sector_index
            .get(dependency_sector)
            .map(|&i| &self.sectors[i])
    }
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.find(|name| !seen.insert(*name))
}

/// Industry names of the builtin catalog.
#[must_use]
pub fn list_industries() -> Vec<&'static str> {
    Catalog::builtin().list_industries()
}

/// Looks up an industry in the builtin catalog.
///
/// # Errors
///
/// Returns [`PathwayError::NotFound`] if `id` is not a known industry.
pub fn get_industry(id: &str) -> Result<&'static Industry, PathwayError> {
    Catalog::builtin().get_industry(id)
}

/// Mitigation sector names of the builtin catalog.
#[must_use]
pub fn list_sectors() -> Vec<&'static str> {
    Catalog::builtin().list_sectors()
}

/// Looks up a mitigation sector in the builtin catalog.
///
/// # Errors
///
/// Returns [`PathwayError::NotFound`] if `id` is not a known sector.
pub fn get_sector(id: &str) -> Result<&'static MitigationSector, PathwayError> {
    Catalog::builtin().get_sector(id)
}

/// Guidance coverage of an industry in the builtin catalog.
///
/// # Errors
///
/// Returns [`PathwayError::NotFound`] if `id` is not a known industry.
pub fn guidance_coverage(id: &str) -> Result<f64, PathwayError> {
    Catalog::builtin().guidance_coverage(id)
}
