use std::fmt;
use serde::{Deserialize, Serialize};
use uom::si::{angle::degree, mass::{kilogram, ton}};

use crate::types::*;

/// Relative tolerance for float noise when rounding to a display step
///
/// Far below any real digit: a limit of 1399.9999995 kg still shows as
/// 1399 kg, while `1120 / M * M` shows as 1120 kg.
const ROUNDING_SLACK: f64 = 1e-12;

/// Unit used when presenting load limits and requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MassUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilogram,

    #[serde(rename = "t")]
    Tonne,
}

impl MassUnit {
    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
        }
    }

    /// Value in this unit and the display step it is rounded to
    fn scaled(self, mass: Mass) -> (f64, f64) {
        match self {
            MassUnit::Kilogram => (mass.get::<kilogram>(), 1.0),
            MassUnit::Tonne => (mass.get::<ton>(), 0.01),
        }
    }
}

#[derive(Debug)]
pub struct DisplayMass(pub Mass);
#[derive(Debug)]
pub struct DisplayAngle(pub Angle);

/// A permissible load, rounded down to the display step
#[derive(Debug)]
pub struct DisplayLoadLimit(pub Mass, pub MassUnit);

/// A minimum required capacity, rounded up to the display step
#[derive(Debug)]
pub struct DisplayRequirement(pub Mass, pub MassUnit);

impl fmt::Display for DisplayMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kg = self.0.get::<kilogram>();
        let tonnes = self.0.get::<ton>();
        write!(f, "{:.0} kg ({:.2} t)", kg, tonnes)
    }
}

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0.get::<degree>())
    }
}

impl fmt::Display for DisplayLoadLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, step) = self.1.scaled(self.0);
        let steps = value / step;
        let rounded = (steps + steps.abs() * ROUNDING_SLACK).floor() * step;
        write_stepped(f, rounded, step, self.1)
    }
}

impl fmt::Display for DisplayRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, step) = self.1.scaled(self.0);
        let steps = value / step;
        let rounded = (steps - steps.abs() * ROUNDING_SLACK).ceil() * step;
        write_stepped(f, rounded, step, self.1)
    }
}

fn write_stepped(f: &mut fmt::Formatter<'_>, value: f64, step: f64, unit: MassUnit) -> fmt::Result {
    if step >= 1.0 {
        write!(f, "{:.0} {}", value, unit.symbol())
    } else {
        write!(f, "{:.2} {}", value, unit.symbol())
    }
}
