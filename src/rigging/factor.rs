//! Load factors (M) for multi-leg slings per DGUV Information 209-021
//!
//! The factor converts the WLL of a single leg into the permissible load of
//! the whole attachment. It depends only on the number of load-bearing legs,
//! the inclination bracket and whether the load hangs symmetrically.

use crate::rigging::{
    max_load, required_per_leg_capacity, AngleBracket, RiggingConfiguration, RiggingError,
};
use crate::types::*;
use serde::Serialize;

/// The factor table has no rows beyond four legs
pub const MAX_TABLE_STRANDS: u32 = 4;

/// Rows: 1..=4 legs. Columns: vertical, 0°-45°, 45°-60°.
const LOAD_FACTOR_TABLE: [[f64; 3]; MAX_TABLE_STRANDS as usize] = [
    [1.0, 1.0, 1.0],
    [2.0, 1.4, 1.0],
    [3.0, 2.1, 1.5],
    [4.0, 2.1, 1.5],
];

fn table_factor(strands: u32, column: usize) -> f64 {
    LOAD_FACTOR_TABLE[(strands - 1) as usize][column]
}

/// Resolve the geometry factor M
///
/// Returns `0.0` for a forbidden angle. That value is a sentinel, not a
/// multiplier: use [`LoadFactor::resolve`] or the capacity functions, which
/// turn it into [`RiggingError::ForbiddenAngle`].
///
/// Counts above four are folded into the four-leg row (a basket with three or
/// four attachment points is rated like four legs), a count of zero is read
/// as one leg.
pub fn resolve_factor(effective_strand_count: u32, angle: AngleBracket, symmetric: bool) -> f64 {
    let Some(column) = angle.column() else {
        return 0.0;
    };

    let strands = effective_strand_count.clamp(1, MAX_TABLE_STRANDS);

    // Asymmetric loads never reach the 1, 3 and 4 leg rows
    if !symmetric {
        return if strands <= 2 {
            1.0
        } else {
            table_factor(2, column)
        };
    }

    table_factor(strands, column)
}

/// Resolved factors for a permitted configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadFactor {
    /// Geometry factor M from the table
    geometry: f64,

    /// Reeving derate A
    derate: f64,
}

impl LoadFactor {
    pub fn resolve(config: &RiggingConfiguration) -> Result<Self, RiggingError> {
        let geometry = resolve_factor(
            config.effective_strand_count(),
            config.angle(),
            config.is_symmetric(),
        );

        if geometry == 0.0 {
            tracing::debug!(configuration = %config, "rejected forbidden sling angle");
            return Err(RiggingError::ForbiddenAngle);
        }

        Ok(Self {
            geometry,
            derate: config.reeving().derate(),
        })
    }

    pub fn geometry(&self) -> f64 {
        self.geometry
    }

    pub fn derate(&self) -> f64 {
        self.derate
    }

    /// Combined factor A × M
    pub fn total(&self) -> f64 {
        self.derate * self.geometry
    }

    /// Permissible load for legs of the given WLL
    pub fn max_load(&self, rated_capacity: Mass, parallel_sets: u32) -> Result<Mass, RiggingError> {
        max_load(rated_capacity, self.derate, self.geometry, parallel_sets)
    }

    /// Minimum WLL each leg needs to carry `load`
    pub fn required_per_leg(&self, load: Mass, parallel_sets: u32) -> Result<Mass, RiggingError> {
        required_per_leg_capacity(load, parallel_sets, self.derate, self.geometry)
    }
}
