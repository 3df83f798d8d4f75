//! Built-in product tables for the families that have standard sizes
//!
//! Capacities are in kilograms, ascending.

use crate::catalog::MaterialFamily;

/// Round slings, colour coded by WLL (EN 1492-2)
const ROUND_SLINGS: &[(f64, &str)] = &[
    (1000.0, "1000 kg (violet)"),
    (2000.0, "2000 kg (green)"),
    (3000.0, "3000 kg (yellow)"),
    (4000.0, "4000 kg (grey)"),
    (5000.0, "5000 kg (red)"),
    (6000.0, "6000 kg (brown)"),
    (8000.0, "8000 kg (blue)"),
    (10000.0, "10000 kg (orange)"),
];

/// Grade 8 chain by nominal link diameter
const CHAIN_GRADE_8: &[(f64, &str)] = &[
    (1120.0, "6 mm (1.12 t)"),
    (1500.0, "7 mm (1.5 t)"),
    (2000.0, "8 mm (2.0 t)"),
    (3150.0, "10 mm (3.15 t)"),
    (5300.0, "13 mm (5.3 t)"),
    (8000.0, "16 mm (8.0 t)"),
    (11200.0, "18 mm (11.2 t)"),
    (15000.0, "20 mm (15.0 t)"),
];

/// Standard sizes for a family, `None` when it has no built-in table
///
/// Endless webbing slings share the round sling sizes.
pub fn standard_sizes(family: MaterialFamily) -> Option<&'static [(f64, &'static str)]> {
    match family {
        MaterialFamily::RoundSling | MaterialFamily::EndlessWebbingSling => Some(ROUND_SLINGS),
        MaterialFamily::ChainGrade8 => Some(CHAIN_GRADE_8),
        MaterialFamily::ChainGrade10
        | MaterialFamily::ChainGrade4
        | MaterialFamily::ChainGrade2
        | MaterialFamily::WireRope
        | MaterialFamily::NaturalFiberRope
        | MaterialFamily::CableLaidGrummet => None,
    }
}
