use crate::catalog::{CatalogEntry, CatalogLibrary, MaterialFamily};
use crate::planning::{default_parallel_sets, default_symmetric, AngleInput, PlanningError};
use crate::rigging::{LoadFactor, ReevingMode, RiggingConfiguration};
use crate::types::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A load to lift; find the sling size it needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingRequest {
    pub material: MaterialFamily,

    /// Total weight of the load
    pub load: MassValue,

    pub attachment_points: u32,
    pub reeving: ReevingMode,
    pub angle: AngleInput,

    #[serde(default = "default_symmetric")]
    pub symmetric: bool,

    #[serde(default = "default_parallel_sets")]
    pub parallel_sets: u32,
}

/// Outcome of the catalog lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Smallest standard size that carries the requirement
    Product(CatalogEntry),

    /// No catalog, or nothing large enough; only the number can be reported
    RequirementOnly,
}

impl SizingRequest {
    pub fn configuration(&self) -> Result<RiggingConfiguration, PlanningError> {
        let angle = self.angle.bracket()?;
        Ok(RiggingConfiguration::new(
            self.attachment_points,
            self.reeving,
            angle,
            self.symmetric,
        )?)
    }

    /// Work out the per-leg WLL and look it up in `library`
    pub fn size(&self, library: &CatalogLibrary) -> Result<SizingReport, PlanningError> {
        let configuration = self.configuration()?;
        let factor = configuration.load_factor()?;
        let load = self.load.to_mass()?;
        let required_per_leg = factor.required_per_leg(load, self.parallel_sets)?;

        let recommendation = match library.size_material(self.material, required_per_leg) {
            Some(entry) => Recommendation::Product(entry.clone()),
            None => Recommendation::RequirementOnly,
        };

        tracing::debug!(
            material = %self.material,
            configuration = %configuration,
            required_kg = required_per_leg.get::<kilogram>(),
            recommendation = ?recommendation,
            "sized sling"
        );

        Ok(SizingReport {
            material: self.material,
            configuration,
            factor,
            load,
            parallel_sets: self.parallel_sets,
            required_per_leg,
            recommendation,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    pub material: MaterialFamily,
    pub configuration: RiggingConfiguration,
    pub factor: LoadFactor,
    pub load: Mass,
    pub parallel_sets: u32,
    pub required_per_leg: Mass,
    pub recommendation: Recommendation,
}

impl SizingReport {
    /// Multi-line summary with masses in `unit`
    pub fn render(&self, unit: MassUnit) -> String {
        self.display_in(unit).to_string()
    }

    pub fn display_in(&self, unit: MassUnit) -> DisplaySizingReport<'_> {
        DisplaySizingReport(self, unit)
    }
}

/// Formats a [`SizingReport`] with masses in the given unit
pub struct DisplaySizingReport<'a>(pub &'a SizingReport, pub MassUnit);

impl fmt::Display for DisplaySizingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DisplaySizingReport(report, unit) = *self;
        let required = DisplayRequirement(report.required_per_leg, unit);

        writeln!(f, "Material: {}", report.material)?;
        writeln!(f, "Rigging: {}", report.configuration)?;
        writeln!(f, "Total load factor (M): {:.2}", report.factor.total())?;
        if report.parallel_sets > 1 {
            writeln!(f, "Parallel rigging sets: {}", report.parallel_sets)?;
        }
        writeln!(f, "Required WLL per leg: at least {}", required)?;
        match &report.recommendation {
            Recommendation::Product(entry) => write!(f, "Recommendation: {}", entry.label),
            Recommendation::RequirementOnly => write!(
                f,
                "No standard size on file: check the load table of the {} \
                 for a size carrying more than {}",
                report.material, required
            ),
        }
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in(MassUnit::Kilogram), f)
    }
}
