use crate::rigging::{derive_effective_strands, AngleBracket, LoadFactor, ReevingMode, RiggingError};
use serde::Serialize;
use std::fmt;

/// How a load is slung for one calculation
///
/// The effective strand count is always derived from the attachment
/// points and the reeving mode; it cannot be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiggingConfiguration {
    attachment_points: u32,
    effective_strand_count: u32,
    angle: AngleBracket,
    symmetric: bool,
    reeving: ReevingMode,
}

impl RiggingConfiguration {
    pub fn new(
        attachment_points: u32,
        reeving: ReevingMode,
        angle: AngleBracket,
        symmetric: bool,
    ) -> Result<Self, RiggingError> {
        if attachment_points == 0 {
            return Err(RiggingError::invalid_input(
                "attachment_points",
                "at least one attachment point is required",
            ));
        }

        Ok(Self {
            attachment_points,
            effective_strand_count: derive_effective_strands(attachment_points, reeving),
            angle,
            symmetric,
            reeving,
        })
    }

    pub fn attachment_points(&self) -> u32 {
        self.attachment_points
    }

    pub fn effective_strand_count(&self) -> u32 {
        self.effective_strand_count
    }

    pub fn angle(&self) -> AngleBracket {
        self.angle
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn reeving(&self) -> ReevingMode {
        self.reeving
    }

    /// Resolve the load factor, rejecting forbidden angles
    pub fn load_factor(&self) -> Result<LoadFactor, RiggingError> {
        LoadFactor::resolve(self)
    }
}

impl fmt::Display for RiggingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points = if self.attachment_points == 1 { "point" } else { "points" };
        let symmetry = if self.symmetric { "symmetric" } else { "asymmetric" };
        write!(
            f,
            "{} attachment {}, {}, {}, {} ({} effective legs)",
            self.attachment_points,
            points,
            self.reeving,
            self.angle,
            symmetry,
            self.effective_strand_count,
        )
    }
}
