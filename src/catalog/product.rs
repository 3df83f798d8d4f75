use crate::catalog::{standard_sizes, CatalogError, MaterialFamily};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// A commercially available sling size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// WLL marked on the product
    pub rated_capacity: Mass,

    /// Designation shown to the user
    pub label: String,
}

impl CatalogEntry {
    pub fn new(rated_capacity: Mass, label: impl Into<String>) -> Self {
        Self {
            rated_capacity,
            label: label.into(),
        }
    }
}

/// Product sizes of one material family, ascending by rated capacity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    family: MaterialFamily,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, sorting the entries by capacity
    ///
    /// Entries with a capacity that is not a positive, finite mass are rejected.
    pub fn new(
        family: MaterialFamily,
        mut entries: Vec<CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty(family));
        }

        for entry in &entries {
            let kg = entry.rated_capacity.get::<kilogram>();
            if !(kg.is_finite() && kg > 0.0) {
                return Err(CatalogError::InvalidEntry {
                    label: entry.label.clone(),
                    reason: format!("rated capacity {kg} kg must be positive"),
                });
            }
        }

        entries.sort_by(|a, b| {
            a.rated_capacity
                .get::<kilogram>()
                .total_cmp(&b.rated_capacity.get::<kilogram>())
        });

        Ok(Self { family, entries })
    }

    /// The built-in catalog for a family, if it has one
    pub fn standard(family: MaterialFamily) -> Option<Self> {
        let sizes = standard_sizes(family)?;
        let entries = sizes
            .iter()
            .map(|(kg, label)| CatalogEntry::new(Mass::new::<kilogram>(*kg), *label))
            .collect();

        Some(Self { family, entries })
    }

    pub fn family(&self) -> MaterialFamily {
        self.family
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest size on file
    pub fn largest(&self) -> Option<&CatalogEntry> {
        self.entries.last()
    }

    /// Smallest entry whose capacity meets or exceeds `required`
    ///
    /// `None` when the requirement exceeds every size on file.
    pub fn find_smallest_fitting(&self, required: Mass) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.rated_capacity >= required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn kg(value: f64) -> Mass {
        Mass::new::<kilogram>(value)
    }

    #[test]
    fn test_round_sling_recommendation() {
        let catalog = Catalog::standard(MaterialFamily::RoundSling).unwrap();
        let entry = catalog.find_smallest_fitting(kg(2500.0)).unwrap();

        assert_relative_eq!(entry.rated_capacity.get::<kilogram>(), 3000.0);
        assert_eq!(entry.label, "3000 kg (yellow)");
    }

    #[test]
    fn test_exact_match_is_not_rounded_up() {
        let catalog = Catalog::standard(MaterialFamily::ChainGrade8).unwrap();
        let entry = catalog.find_smallest_fitting(kg(3150.0)).unwrap();
        assert_eq!(entry.label, "10 mm (3.15 t)");
    }

    #[test]
    fn test_requirement_above_largest() {
        let catalog = Catalog::standard(MaterialFamily::ChainGrade8).unwrap();
        assert!(catalog.find_smallest_fitting(kg(15000.1)).is_none());
        assert_eq!(catalog.largest().unwrap().label, "20 mm (15.0 t)");
    }

    #[test]
    fn test_never_undersized_and_minimal() {
        for family in MaterialFamily::ALL {
            let Some(catalog) = Catalog::standard(family) else {
                continue;
            };

            let mut required = 1.0;
            while required < 16000.0 {
                let needed = kg(required);
                match catalog.find_smallest_fitting(needed) {
                    Some(found) => {
                        assert!(found.rated_capacity >= needed);
                        let smaller_fits = catalog.entries().iter().any(|e| {
                            e.rated_capacity >= needed && e.rated_capacity < found.rated_capacity
                        });
                        assert!(!smaller_fits, "{family}: {required} kg");
                    }
                    None => assert!(catalog.entries().iter().all(|e| e.rated_capacity < needed)),
                }
                required += 137.0;
            }
        }
    }

    #[test]
    fn test_new_sorts_entries() {
        let catalog = Catalog::new(
            MaterialFamily::WireRope,
            vec![
                CatalogEntry::new(kg(4000.0), "16 mm"),
                CatalogEntry::new(kg(1000.0), "8 mm"),
                CatalogEntry::new(kg(2000.0), "12 mm"),
            ],
        )
        .unwrap();

        let labels: Vec<_> = catalog.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["8 mm", "12 mm", "16 mm"]);
        assert_eq!(catalog.find_smallest_fitting(kg(1500.0)).unwrap().label, "12 mm");
    }

    #[test]
    fn test_new_rejects_bad_entries() {
        let empty = Catalog::new(MaterialFamily::WireRope, Vec::new());
        assert!(matches!(empty, Err(CatalogError::Empty(MaterialFamily::WireRope))));

        let negative = Catalog::new(
            MaterialFamily::WireRope,
            vec![CatalogEntry::new(kg(-1.0), "broken")],
        );
        assert!(matches!(negative, Err(CatalogError::InvalidEntry { .. })));
    }
}
