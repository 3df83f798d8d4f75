use uom::si::{f64::Length, length::meter};
use nalgebra as na;

/// Convert UOM Length to internal coordinate (meters)
#[inline]
pub fn to_coord(length: Length) -> f64 {
    length.get::<meter>()
}

/// Create Point3 from UOM Lengths (y is up)
pub fn point_from_lengths(x: Length, y: Length, z: Length) -> na::Point3<f64> {
    na::Point3::new(
        to_coord(x),
        to_coord(y),
        to_coord(z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_from_mixed_units() {
        let point = point_from_lengths(
            Length::new::<millimeter>(500.0),
            Length::new::<meter>(2.0),
            Length::new::<centimeter>(25.0),
        );

        assert_relative_eq!(point.x, 0.5);
        assert_relative_eq!(point.y, 2.0);
        assert_relative_eq!(point.z, 0.25);
    }
}
