use crate::types::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiggingError {
    #[error("Sling angle above 60° from vertical is forbidden")]
    ForbiddenAngle,

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl RiggingError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        RiggingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Permissible load: W × A × M × N
///
/// * `rated_capacity` - WLL of a single leg (W)
/// * `derate` - reeving derate (A)
/// * `geometry_factor` - load factor from the table (M), `0.0` for a forbidden angle
/// * `parallel_sets` - identical rigging sets sharing the load (N)
pub fn max_load(
    rated_capacity: Mass,
    derate: f64,
    geometry_factor: f64,
    parallel_sets: u32,
) -> Result<Mass, RiggingError> {
    check_geometry_factor(geometry_factor)?;
    check_derate(derate)?;
    check_parallel_sets(parallel_sets)?;
    check_mass("rated_capacity", rated_capacity)?;

    let wll_kg = rated_capacity.get::<kilogram>();
    Ok(Mass::new::<kilogram>(
        wll_kg * derate * geometry_factor * parallel_sets as f64,
    ))
}

/// Minimum WLL per leg for a target load: (L / N) / (A × M)
pub fn required_per_leg_capacity(
    load: Mass,
    parallel_sets: u32,
    derate: f64,
    geometry_factor: f64,
) -> Result<Mass, RiggingError> {
    check_geometry_factor(geometry_factor)?;
    check_derate(derate)?;
    check_parallel_sets(parallel_sets)?;
    check_mass("load", load)?;

    let load_per_set = load.get::<kilogram>() / parallel_sets as f64;
    Ok(Mass::new::<kilogram>(
        load_per_set / (derate * geometry_factor),
    ))
}

fn check_geometry_factor(geometry_factor: f64) -> Result<(), RiggingError> {
    if geometry_factor == 0.0 {
        return Err(RiggingError::ForbiddenAngle);
    }
    if !(geometry_factor.is_finite() && geometry_factor > 0.0) {
        return Err(RiggingError::invalid_input(
            "geometry_factor",
            format!("{geometry_factor} is not a load factor"),
        ));
    }
    Ok(())
}

fn check_derate(derate: f64) -> Result<(), RiggingError> {
    if derate > 0.0 && derate <= 1.0 {
        Ok(())
    } else {
        Err(RiggingError::invalid_input(
            "derate",
            format!("{derate} is outside (0, 1]"),
        ))
    }
}

fn check_parallel_sets(parallel_sets: u32) -> Result<(), RiggingError> {
    if parallel_sets == 0 {
        return Err(RiggingError::invalid_input(
            "parallel_sets",
            "at least one rigging set is required",
        ));
    }
    Ok(())
}

fn check_mass(field: &'static str, mass: Mass) -> Result<(), RiggingError> {
    let kg = mass.get::<kilogram>();
    if kg.is_finite() && kg > 0.0 {
        Ok(())
    } else {
        Err(RiggingError::invalid_input(field, format!("{kg} kg must be positive")))
    }
}
