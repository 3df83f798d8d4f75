mod display;
mod explicit_unit_values;

pub use display::{DisplayAngle, DisplayLoadLimit, DisplayMass, DisplayRequirement, MassUnit};
pub use explicit_unit_values::{AngleValue, MassValue, UnitError, WithUnit};
