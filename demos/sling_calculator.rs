use sling_core::catalog::MaterialFamily;
use sling_core::planning::{LoadLimitRequest, PlanningError, SizingRequest};
use sling_core::rigging::{leg_angle_from_vertical, AngleBracket, ReevingMode, RiggingError};
use sling_core::settings::Settings;
use sling_core::types::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional settings file as first argument
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let library = settings.catalog_library()?;

    // Measure the leg angle from the rigging geometry
    let hook = point_from_lengths(
        Length::new::<meter>(0.0),
        Length::new::<meter>(2.0),
        Length::new::<meter>(0.0),
    );
    let attachment = point_from_lengths(
        Length::new::<meter>(1.2),
        Length::new::<meter>(0.0),
        Length::new::<meter>(0.0),
    );
    let angle = AngleBracket::from_geometry(&hook, &attachment);
    if let Some(measured) = leg_angle_from_vertical(&hook, &attachment) {
        println!("Measured leg angle {} -> {}", DisplayAngle(measured), angle);
    }

    // What can two round slings lift?
    let on_hand = LoadLimitRequest {
        material: MaterialFamily::RoundSling,
        rated_capacity: MassValue::new(2000.0, "kg"),
        attachment_points: 2,
        reeving: ReevingMode::DirectPull,
        angle: angle.into(),
        symmetric: true,
        parallel_sets: 1,
    };
    println!("\n{}", on_hand.evaluate()?.render(settings.display_unit));

    // Which chain do I need for a 5 t load?
    let needed = SizingRequest {
        material: MaterialFamily::ChainGrade8,
        load: MassValue::new(5.0, "t"),
        attachment_points: 4,
        reeving: ReevingMode::DirectPull,
        angle: angle.into(),
        symmetric: false,
        parallel_sets: 1,
    };
    println!("\nSizing for a load of {}", DisplayMass(needed.load.to_mass()?));
    println!("{}", needed.size(&library)?.render(settings.display_unit));

    // Too flat a sling is rejected outright
    let mut flat = on_hand.clone();
    flat.angle = AngleBracket::Forbidden.into();
    match flat.evaluate() {
        Err(PlanningError::Rigging(RiggingError::ForbiddenAngle)) => {
            println!("\nSTOP: {}", RiggingError::ForbiddenAngle)
        }
        Ok(report) => println!("\n{}", report),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
