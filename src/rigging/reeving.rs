use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity reduction for a choked (noosed) sling
pub const CHOKED_DERATE: f64 = 0.8;

/// How the sling is attached to the load at each attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReevingMode {
    /// Sling runs straight from the hook to the attachment point
    DirectPull,

    /// Sling is noosed around the load, derated to 80%
    Choked,

    /// Sling is laid under the load with both ends on the hook,
    /// so every attachment point carries two strands
    Basket,
}

impl ReevingMode {
    pub const ALL: [ReevingMode; 3] = [
        ReevingMode::DirectPull,
        ReevingMode::Choked,
        ReevingMode::Basket,
    ];

    /// Capacity multiplier (A) for this reeving method
    pub fn derate(self) -> f64 {
        match self {
            ReevingMode::Choked => CHOKED_DERATE,
            ReevingMode::DirectPull | ReevingMode::Basket => 1.0,
        }
    }

    /// Load-bearing strands formed at a single attachment point
    pub fn strands_per_point(self) -> u32 {
        match self {
            ReevingMode::Basket => 2,
            ReevingMode::DirectPull | ReevingMode::Choked => 1,
        }
    }
}

/// Number of load-bearing strands for a given attachment
pub fn derive_effective_strands(attachment_points: u32, reeving: ReevingMode) -> u32 {
    attachment_points.saturating_mul(reeving.strands_per_point())
}

impl fmt::Display for ReevingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReevingMode::DirectPull => "direct pull",
            ReevingMode::Choked => "choked",
            ReevingMode::Basket => "basket",
        };
        f.write_str(label)
    }
}
