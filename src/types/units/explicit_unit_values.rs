use serde::{self, Deserialize, Serialize};
use uom::si::{angle::{degree, radian}, f64::{Angle, Mass}, mass::{gram, kilogram, pound, ton}};
use std::marker::PhantomData;

/// A raw value with its unit as written in a catalog or lift plan file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type MassValue = WithUnit<Mass>;
pub type AngleValue = WithUnit<Angle>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }

    fn normalized_unit(&self) -> String {
        self.unit.trim().to_lowercase()
    }
}

impl<T> PartialEq for WithUnit<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown mass unit: {0}")]
    UnknownMassUnit(String),

    #[error("Unknown angle unit: {0}")]
    UnknownAngleUnit(String),
}

impl WithUnit<Mass> {
    pub fn to_mass(&self) -> Result<Mass, UnitError> {
        match self.normalized_unit().as_str() {
            "kg" | "kgs"
            | "kilogram" | "kilograms" => Ok(Mass::new::<kilogram>(self.value)),
            "t" | "tonne" | "tonnes"
            | "metric ton" | "metric tons" => Ok(Mass::new::<ton>(self.value)),
            "lb" | "lbs"
            | "pound" | "pounds" => Ok(Mass::new::<pound>(self.value)),
            "g" | "gram" | "grams" => Ok(Mass::new::<gram>(self.value)),
            _ => Err(UnitError::UnknownMassUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Angle> {
    pub fn to_angle(&self) -> Result<Angle, UnitError> {
        match self.normalized_unit().as_str() {
            "deg" | "degree" | "degrees" | "°" => Ok(Angle::new::<degree>(self.value)),
            "rad" | "rads"
            | "radian" | "radians" => Ok(Angle::new::<radian>(self.value)),
            _ => Err(UnitError::UnknownAngleUnit(self.unit.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_units() {
        assert_relative_eq!(MassValue::new(2.5, "t").to_mass().unwrap().get::<kilogram>(), 2500.0);
        assert_relative_eq!(
            MassValue::new(1000.0, "KG").to_mass().unwrap().get::<kilogram>(),
            1000.0
        );
        assert_relative_eq!(
            MassValue::new(2204.62, " lbs ").to_mass().unwrap().get::<kilogram>(),
            1000.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_unknown_mass_unit() {
        let err = MassValue::new(1.0, "stone").to_mass().unwrap_err();
        assert_eq!(err, UnitError::UnknownMassUnit("stone".into()));
    }

    #[test]
    fn test_angle_units() {
        assert_relative_eq!(AngleValue::new(45.0, "°").to_angle().unwrap().get::<degree>(), 45.0);
        assert_relative_eq!(
            AngleValue::new(std::f64::consts::FRAC_PI_3, "rad").to_angle().unwrap().get::<degree>(),
            60.0,
            epsilon = 1e-9
        );
        assert!(AngleValue::new(1.0, "gon").to_angle().is_err());
    }

    #[test]
    fn test_mass_value_from_toml() {
        let value: MassValue = toml::from_str("value = 1.12\nunit = \"t\"").unwrap();
        assert_relative_eq!(value.to_mass().unwrap().get::<kilogram>(), 1120.0, epsilon = 1e-9);
    }
}
