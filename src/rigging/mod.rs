pub mod angle;
pub mod reeving;
pub mod configuration;
pub mod factor;
pub mod capacity;

pub use angle::*;
pub use reeving::*;
pub use configuration::*;
pub use factor::*;
pub use capacity::*;
