use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the shallow bracket, degrees from vertical
pub const SHALLOW_LIMIT_DEG: f64 = 45.0;

/// Largest permitted inclination, degrees from vertical
pub const STEEP_LIMIT_DEG: f64 = 60.0;

/// Anything closer to plumb than this counts as a vertical leg
const VERTICAL_TOLERANCE_DEG: f64 = 1e-9;

/// Inclination bracket (β) of the sling legs, measured from the vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleBracket {
    /// β = 0°
    Vertical,

    /// 0° < β ≤ 45°
    Shallow,

    /// 45° < β ≤ 60°
    Steep,

    /// β > 60°. Never permitted and never assigned a load factor.
    Forbidden,
}

impl AngleBracket {
    pub const ALL: [AngleBracket; 4] = [
        AngleBracket::Vertical,
        AngleBracket::Shallow,
        AngleBracket::Steep,
        AngleBracket::Forbidden,
    ];

    /// The brackets that have a load factor
    pub const PERMITTED: [AngleBracket; 3] = [
        AngleBracket::Vertical,
        AngleBracket::Shallow,
        AngleBracket::Steep,
    ];

    /// Column of this bracket in the load factor table
    pub(crate) fn column(self) -> Option<usize> {
        match self {
            AngleBracket::Vertical => Some(0),
            AngleBracket::Shallow => Some(1),
            AngleBracket::Steep => Some(2),
            AngleBracket::Forbidden => None,
        }
    }

    pub fn is_permitted(self) -> bool {
        self != AngleBracket::Forbidden
    }

    /// Classify a measured leg angle (from vertical) into its bracket
    ///
    /// Bracket limits are inclusive: exactly 45° is still shallow and
    /// exactly 60° is still steep.
    pub fn classify(angle_from_vertical: Angle) -> Self {
        let degrees = angle_from_vertical.get::<degree>().abs();

        match degrees {
            d if d.is_nan() => AngleBracket::Forbidden,
            d if d <= VERTICAL_TOLERANCE_DEG => AngleBracket::Vertical,
            d if d <= SHALLOW_LIMIT_DEG => AngleBracket::Shallow,
            d if d <= STEEP_LIMIT_DEG => AngleBracket::Steep,
            _ => AngleBracket::Forbidden,
        }
    }

    /// Classify the leg running from a load attachment point up to the hook
    pub fn from_geometry(hook: &na::Point3<f64>, attachment: &na::Point3<f64>) -> Self {
        match leg_angle_from_vertical(hook, attachment) {
            Some(angle) => Self::classify(angle),
            None => AngleBracket::Forbidden,
        }
    }
}

/// Angle between a sling leg and the vertical
///
/// Returns `None` when the hook is not above the attachment point, since
/// such a leg cannot carry load from above.
pub fn leg_angle_from_vertical(
    hook: &na::Point3<f64>,
    attachment: &na::Point3<f64>,
) -> Option<Angle> {
    let leg = hook - attachment;
    let length = leg.magnitude();

    if length < 1e-9 || leg.y <= 0.0 {
        return None;
    }

    let cos_angle = (leg.y / length).min(1.0);
    Some(Angle::new::<radian>(cos_angle.acos()))
}

impl fmt::Display for AngleBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AngleBracket::Vertical => "0° (vertical)",
            AngleBracket::Shallow => "0°-45°",
            AngleBracket::Steep => "45°-60°",
            AngleBracket::Forbidden => ">60° (forbidden)",
        };
        f.write_str(label)
    }
}
