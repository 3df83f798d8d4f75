//! Calculator settings, read from a TOML file
//!
//! ```toml
//! catalog_dir = "catalogs"   # optional, overrides built-in catalogs
//! display_unit = "t"         # "kg" (default) or "t"
//! ```

use crate::catalog::{CatalogError, CatalogLibrary};
use crate::types::*;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory of catalog files loaded over the built-in tables
    pub catalog_dir: Option<PathBuf>,

    /// Unit for presenting loads and requirements
    pub display_unit: MassUnit,
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read settings from a file
    ///
    /// A relative `catalog_dir` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let mut settings = Self::from_toml_str(&fs::read_to_string(path)?)?;

        if let Some(parent) = path.parent() {
            settings.catalog_dir = settings
                .catalog_dir
                .take()
                .map(|dir| if dir.is_relative() { parent.join(dir) } else { dir });
        }

        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Catalogs to size against: built-ins, plus `catalog_dir` if set
    pub fn catalog_library(&self) -> Result<CatalogLibrary, SettingsError> {
        match &self.catalog_dir {
            Some(dir) => Ok(CatalogLibrary::from_directory(dir)?),
            None => Ok(CatalogLibrary::standard()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaterialFamily;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display_unit, MassUnit::Kilogram);
        assert!(settings.catalog_dir.is_none());
    }

    #[test]
    fn test_display_unit() {
        let settings = Settings::from_toml_str("display_unit = \"t\"").unwrap();
        assert_eq!(settings.display_unit, MassUnit::Tonne);

        assert!(Settings::from_toml_str("display_unit = \"stone\"").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::from_toml_str("catalogue_dir = \"x\"");
        assert!(matches!(result, Err(SettingsError::TomlError(_))));
    }

    #[test]
    fn test_relative_catalog_dir() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = dir.path().join("catalogs");
        fs::create_dir(&catalogs).unwrap();
        fs::write(
            catalogs.join("rope.csv"),
            "family,capacity,unit,label\nnatural_fiber_rope,250,kg,16 mm hemp\nnatural_fiber_rope,400,kg,20 mm hemp\n",
        )
        .unwrap();

        let path = dir.path().join("sling.toml");
        fs::write(&path, "catalog_dir = \"catalogs\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.catalog_dir.as_deref(), Some(catalogs.as_path()));

        let library = settings.catalog_library().unwrap();
        let rope = library
            .size_material(MaterialFamily::NaturalFiberRope, Mass::new::<kilogram>(300.0))
            .unwrap();
        assert_eq!(rope.label, "20 mm hemp");
        assert!(library.get(MaterialFamily::RoundSling).is_some());
    }

    #[test]
    fn test_missing_catalog_dir() {
        let settings = Settings {
            catalog_dir: Some(PathBuf::from("/nonexistent/sling/catalogs")),
            ..Settings::default()
        };
        assert!(matches!(
            settings.catalog_library(),
            Err(SettingsError::CatalogError(CatalogError::IoError(_)))
        ));
    }
}
