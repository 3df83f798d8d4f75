pub mod units;
pub mod conversion;

pub use uom::si::f64::{Angle, Length, Mass};
pub use uom::si::{
    angle::{degree, radian},
    length::{centimeter, foot, meter, millimeter},
    mass::{gram, kilogram, pound, ton},
};
pub use uom::si::{angle, length, mass};

pub use units::*;
pub use conversion::*;

pub use nalgebra as na;
