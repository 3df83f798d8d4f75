use serde::{Deserialize, Serialize};
use std::fmt;

/// Sling material families covered by DGUV Information 209-021
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialFamily {
    /// Round slings made of man-made fibre
    RoundSling,

    /// Round steel chain, grade 8
    ChainGrade8,

    /// Round steel chain, grade 10
    ChainGrade10,

    /// Round steel chain, grade 4
    ChainGrade4,

    /// Round steel chain, grade 2
    ChainGrade2,

    /// Endless man-made fibre webbing slings
    EndlessWebbingSling,

    /// Stranded wire rope
    WireRope,

    /// Natural fibre rope
    NaturalFiberRope,

    /// Cable-laid grummets
    CableLaidGrummet,
}

impl MaterialFamily {
    pub const ALL: [MaterialFamily; 9] = [
        MaterialFamily::RoundSling,
        MaterialFamily::ChainGrade8,
        MaterialFamily::ChainGrade10,
        MaterialFamily::ChainGrade4,
        MaterialFamily::ChainGrade2,
        MaterialFamily::EndlessWebbingSling,
        MaterialFamily::WireRope,
        MaterialFamily::NaturalFiberRope,
        MaterialFamily::CableLaidGrummet,
    ];
}

impl fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialFamily::RoundSling => "round sling (man-made fibre)",
            MaterialFamily::ChainGrade8 => "round steel chain grade 8",
            MaterialFamily::ChainGrade10 => "round steel chain grade 10",
            MaterialFamily::ChainGrade4 => "round steel chain grade 4",
            MaterialFamily::ChainGrade2 => "round steel chain grade 2",
            MaterialFamily::EndlessWebbingSling => "endless webbing sling (man-made fibre)",
            MaterialFamily::WireRope => "stranded wire rope",
            MaterialFamily::NaturalFiberRope => "natural fibre rope",
            MaterialFamily::CableLaidGrummet => "cable-laid grummet",
        };
        f.write_str(name)
    }
}
