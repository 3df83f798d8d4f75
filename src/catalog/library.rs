use crate::catalog::{Catalog, CatalogEntry, MaterialFamily};
use crate::types::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error types for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unit conversion error: {0}")]
    UnitError(#[from] UnitError),

    #[error("Unsupported catalog file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid catalog entry '{label}': {reason}")]
    InvalidEntry {
        label: String,
        reason: String,
    },

    #[error("Catalog file mixes {0} and {1}")]
    MixedFamilies(MaterialFamily, MaterialFamily),

    #[error("Catalog for {0} has no entries")]
    Empty(MaterialFamily),

    #[error("CSV catalog has no rows")]
    NoRows,
}

/// File formats a catalog can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(CatalogFormat::Json),
            "toml" => Some(CatalogFormat::Toml),
            "csv" => Some(CatalogFormat::Csv),
            _ => None,
        }
    }
}

/// On-disk layout of a JSON or TOML catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub family: MaterialFamily,
    pub entries: Vec<CatalogRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub rated_capacity: MassValue,
    pub label: String,
}

/// One row of a CSV catalog: `family,capacity,unit,label`
#[derive(Debug, Deserialize)]
struct CsvRow {
    family: MaterialFamily,
    capacity: f64,
    unit: String,
    label: String,
}

impl CatalogFile {
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let entries = self
            .entries
            .into_iter()
            .map(|record| {
                let capacity = record.rated_capacity.to_mass()?;
                Ok(CatalogEntry::new(capacity, record.label))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Catalog::new(self.family, entries)
    }
}

/// Parse catalog text in the given format
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    match format {
        CatalogFormat::Json => serde_json::from_str::<CatalogFile>(contents)?.into_catalog(),
        CatalogFormat::Toml => toml::from_str::<CatalogFile>(contents)?.into_catalog(),
        CatalogFormat::Csv => parse_csv_catalog(contents),
    }
}

fn parse_csv_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut family: Option<MaterialFamily> = None;
    let mut records = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        let row = row?;
        match family {
            Some(existing) if existing != row.family => {
                return Err(CatalogError::MixedFamilies(existing, row.family));
            }
            _ => family = Some(row.family),
        }
        records.push(CatalogRecord {
            rated_capacity: MassValue::new(row.capacity, row.unit),
            label: row.label,
        });
    }

    let family = family.ok_or(CatalogError::NoRows)?;

    CatalogFile { family, entries: records }.into_catalog()
}

/// Product catalogs for every material family that has one
#[derive(Debug, Default)]
pub struct CatalogLibrary {
    catalogs: HashMap<MaterialFamily, Catalog>,
}

impl CatalogLibrary {
    /// Create a new empty catalog library
    pub fn new() -> Self {
        Self {
            catalogs: HashMap::new(),
        }
    }

    /// Library holding the built-in catalogs
    pub fn standard() -> Self {
        let mut library = Self::new();
        for family in MaterialFamily::ALL {
            if let Some(catalog) = Catalog::standard(family) {
                library.add_catalog(catalog);
            }
        }
        library
    }

    /// Built-in catalogs, overridden by every catalog file in `path`
    pub fn from_directory(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut library = Self::standard();
        library.load_all_from_directory(path)?;
        Ok(library)
    }

    /// Load all supported catalog files from a directory
    ///
    /// Files that fail to parse are skipped. Returns the number loaded.
    pub fn load_all_from_directory(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<usize, CatalogError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(path)? {
            let path = entry?.path();
            if CatalogFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        // Later files win, so keep the order independent of the filesystem
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_catalog_from_file(&path) {
                Ok(family) => {
                    tracing::info!(%family, path = %path.display(), "loaded catalog");
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipped catalog file")
                }
            }
        }
        Ok(loaded)
    }

    /// Load a catalog file, replacing any catalog of the same family
    pub fn load_catalog_from_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<MaterialFamily, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.display().to_string()))?;

        let contents = fs::read_to_string(path)?;
        let catalog = parse_catalog(&contents, format)?;
        let family = catalog.family();
        self.add_catalog(catalog);

        Ok(family)
    }

    /// Add a catalog, returning the one it replaces
    pub fn add_catalog(&mut self, catalog: Catalog) -> Option<Catalog> {
        self.catalogs.insert(catalog.family(), catalog)
    }

    pub fn get(&self, family: MaterialFamily) -> Option<&Catalog> {
        self.catalogs.get(&family)
    }

    /// Smallest product of `family` meeting `required`
    ///
    /// `None` when the family has no catalog or nothing is large enough;
    /// callers then report the raw requirement.
    pub fn size_material(&self, family: MaterialFamily, required: Mass) -> Option<&CatalogEntry> {
        self.get(family)?.find_smallest_fitting(required)
    }

    /// Families with a catalog, in declaration order
    pub fn families(&self) -> Vec<MaterialFamily> {
        let mut families: Vec<MaterialFamily> = self.catalogs.keys().copied().collect();
        families.sort();
        families
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const WIRE_ROPE_TOML: &str = r#"
family = "wire_rope"

[[entries]]
label = "12 mm"
rated_capacity = { value = 1.5, unit = "t" }

[[entries]]
label = "8 mm"
rated_capacity = { value = 700, unit = "kg" }
"#;

    const WIRE_ROPE_CSV: &str = "family,capacity,unit,label
wire_rope, 700, kg, 8 mm
wire_rope, 1.5, t, 12 mm
wire_rope, 2.7, t, 16 mm
";

    fn kg(value: f64) -> Mass {
        Mass::new::<kilogram>(value)
    }

    #[test]
    fn test_standard_library() {
        let library = CatalogLibrary::standard();
        assert_eq!(library.len(), 3);
        assert_eq!(
            library.families(),
            vec![
                MaterialFamily::RoundSling,
                MaterialFamily::ChainGrade8,
                MaterialFamily::EndlessWebbingSling,
            ]
        );

        let entry = library.size_material(MaterialFamily::EndlessWebbingSling, kg(4500.0)).unwrap();
        assert_eq!(entry.label, "5000 kg (red)");
        assert!(library.size_material(MaterialFamily::NaturalFiberRope, kg(100.0)).is_none());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let catalog = parse_catalog(WIRE_ROPE_TOML, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.family(), MaterialFamily::WireRope);
        assert_eq!(catalog.entries()[0].label, "8 mm");
        assert_relative_eq!(catalog.entries()[1].rated_capacity.get::<kilogram>(), 1500.0);
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{
            "family": "chain_grade10",
            "entries": [
                { "rated_capacity": { "value": 1.4, "unit": "t" }, "label": "6 mm" },
                { "rated_capacity": { "value": 2.5, "unit": "t" }, "label": "8 mm" }
            ]
        }"#;

        let catalog = parse_catalog(json, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.family(), MaterialFamily::ChainGrade10);
        assert_eq!(catalog.find_smallest_fitting(kg(1500.0)).unwrap().label, "8 mm");
    }

    #[test]
    fn test_parse_csv_catalog() {
        let catalog = parse_catalog(WIRE_ROPE_CSV, CatalogFormat::Csv).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_smallest_fitting(kg(1600.0)).unwrap().label, "16 mm");
    }

    #[test]
    fn test_csv_header_only() {
        let result = parse_catalog("family,capacity,unit,label\n", CatalogFormat::Csv);
        assert!(matches!(result, Err(CatalogError::NoRows)));

        let result = parse_catalog("", CatalogFormat::Csv);
        assert!(matches!(result, Err(CatalogError::NoRows)));
    }

    #[test]
    fn test_csv_rejects_mixed_families() {
        let csv = "family,capacity,unit,label\nwire_rope,700,kg,8 mm\nround_sling,1000,kg,violet\n";
        let result = parse_catalog(csv, CatalogFormat::Csv);
        assert!(matches!(
            result,
            Err(CatalogError::MixedFamilies(MaterialFamily::WireRope, MaterialFamily::RoundSling))
        ));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let toml = r#"
family = "wire_rope"

[[entries]]
label = "8 mm"
rated_capacity = { value = 1, unit = "stone" }
"#;
        let result = parse_catalog(toml, CatalogFormat::Toml);
        assert!(matches!(result, Err(CatalogError::UnitError(_))));
    }

    #[test]
    fn test_load_from_directory_overrides_standard() {
        let dir = tempfile::tempdir().unwrap();

        let mut rope = fs::File::create(dir.path().join("wire_rope.toml")).unwrap();
        rope.write_all(WIRE_ROPE_TOML.as_bytes()).unwrap();

        let slings = "family,capacity,unit,label\nround_sling,1500,kg,house 1.5 t\nround_sling,2500,kg,house 2.5 t\n";
        fs::write(dir.path().join("slings.csv"), slings).unwrap();

        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let library = CatalogLibrary::from_directory(dir.path()).unwrap();
        assert_eq!(library.len(), 4);

        let sling = library.size_material(MaterialFamily::RoundSling, kg(2100.0)).unwrap();
        assert_eq!(sling.label, "house 2.5 t");

        let rope = library.size_material(MaterialFamily::WireRope, kg(1000.0)).unwrap();
        assert_eq!(rope.label, "12 mm");

        // Chain keeps its built-in table
        let chain = library.size_material(MaterialFamily::ChainGrade8, kg(1200.0)).unwrap();
        assert_eq!(chain.label, "7 mm (1.5 t)");
    }

    #[test]
    fn test_load_unsupported_file() {
        let mut file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
        writeln!(file, "<catalog/>").unwrap();

        let mut library = CatalogLibrary::new();
        let result = library.load_catalog_from_file(file.path());
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
        assert!(library.is_empty());
    }
}
