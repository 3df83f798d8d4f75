use crate::catalog::MaterialFamily;
use crate::planning::{default_parallel_sets, default_symmetric, AngleInput, PlanningError};
use crate::rigging::{LoadFactor, ReevingMode, RiggingConfiguration};
use crate::types::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slings on hand; find the permissible load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadLimitRequest {
    pub material: MaterialFamily,

    /// WLL marked on each leg
    pub rated_capacity: MassValue,

    pub attachment_points: u32,
    pub reeving: ReevingMode,
    pub angle: AngleInput,

    #[serde(default = "default_symmetric")]
    pub symmetric: bool,

    /// Identical rigging sets sharing the load
    #[serde(default = "default_parallel_sets")]
    pub parallel_sets: u32,
}

impl LoadLimitRequest {
    pub fn configuration(&self) -> Result<RiggingConfiguration, PlanningError> {
        let angle = self.angle.bracket()?;
        Ok(RiggingConfiguration::new(
            self.attachment_points,
            self.reeving,
            angle,
            self.symmetric,
        )?)
    }

    pub fn evaluate(&self) -> Result<LoadLimitReport, PlanningError> {
        let configuration = self.configuration()?;
        let factor = configuration.load_factor()?;
        let rated_capacity = self.rated_capacity.to_mass()?;
        let max_load = factor.max_load(rated_capacity, self.parallel_sets)?;

        tracing::debug!(
            material = %self.material,
            configuration = %configuration,
            max_load_kg = max_load.get::<kilogram>(),
            "evaluated load limit"
        );

        Ok(LoadLimitReport {
            material: self.material,
            configuration,
            factor,
            rated_capacity,
            parallel_sets: self.parallel_sets,
            max_load,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadLimitReport {
    pub material: MaterialFamily,
    pub configuration: RiggingConfiguration,
    pub factor: LoadFactor,
    pub rated_capacity: Mass,
    pub parallel_sets: u32,
    pub max_load: Mass,
}

impl LoadLimitReport {
    /// Multi-line summary with masses in `unit`
    pub fn render(&self, unit: MassUnit) -> String {
        self.display_in(unit).to_string()
    }

    pub fn display_in(&self, unit: MassUnit) -> DisplayLoadLimitReport<'_> {
        DisplayLoadLimitReport(self, unit)
    }
}

/// Formats a [`LoadLimitReport`] with masses in the given unit
pub struct DisplayLoadLimitReport<'a>(pub &'a LoadLimitReport, pub MassUnit);

impl fmt::Display for DisplayLoadLimitReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DisplayLoadLimitReport(report, unit) = *self;

        writeln!(f, "Material: {}", report.material)?;
        writeln!(f, "Rigging: {}", report.configuration)?;
        writeln!(
            f,
            "Factors: reeving {:.2} x geometry {:.2} (M)",
            report.factor.derate(),
            report.factor.geometry()
        )?;
        if report.parallel_sets > 1 {
            writeln!(f, "Parallel rigging sets: {}", report.parallel_sets)?;
        }
        write!(f, "Maximum load: {}", DisplayLoadLimit(report.max_load, unit))
    }
}

impl fmt::Display for LoadLimitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in(MassUnit::Kilogram), f)
    }
}
