pub mod family;
pub mod standard;
pub mod product;
pub mod library;

pub use family::*;
pub use standard::*;
pub use product::*;
pub use library::*;

use crate::types::*;

/// Smallest built-in product of `family` meeting `required`
///
/// `None` when the family has no built-in catalog or the requirement
/// exceeds its largest size.
pub fn size_material(family: MaterialFamily, required: Mass) -> Option<CatalogEntry> {
    Catalog::standard(family)?
        .find_smallest_fitting(required)
        .cloned()
}
