pub mod types;
pub mod rigging;
pub mod catalog;
pub mod planning;
pub mod settings;

pub use types::*;
