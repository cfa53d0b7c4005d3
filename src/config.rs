use crate::domain::tax::TaxTable;
use crate::error::{RentalError, Result};
use std::path::{Path, PathBuf};

/// Default location of the vehicle records.
pub const DEFAULT_CARS_PATH: &str = "database/cars.json";

/// Deployment settings for the rental service.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalConfig {
    pub cars_path: PathBuf,
    pub tax_table: TaxTable,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            cars_path: PathBuf::from(DEFAULT_CARS_PATH),
            tax_table: TaxTable::default(),
        }
    }
}

impl RentalConfig {
    pub fn new(cars_path: impl Into<PathBuf>) -> Self {
        Self {
            cars_path: cars_path.into(),
            ..Self::default()
        }
    }

    /// Replaces the tax table with one read from a JSON array of brackets.
    pub fn with_tax_table_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        self.tax_table = serde_json::from_str(&contents).map_err(|e| {
            RentalError::Config(format!("invalid tax table {}: {e}", path.display()))
        })?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RentalConfig::default();
        assert_eq!(config.cars_path, PathBuf::from("database/cars.json"));
        assert_eq!(config.tax_table, TaxTable::default());
    }

    #[test]
    fn test_tax_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"from": 25, "multiplier": "0.05"}}]"#).unwrap();

        let config = RentalConfig::new("cars.json")
            .with_tax_table_file(file.path())
            .unwrap();
        assert_eq!(config.tax_table.rentable_from(), 25);
        assert_eq!(config.tax_table.bracket_for(90).unwrap().multiplier, dec!(0.05));
    }

    #[test]
    fn test_invalid_tax_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[]"#).unwrap();

        let result = RentalConfig::default().with_tax_table_file(file.path());
        assert!(matches!(result, Err(RentalError::Config(_))));
    }
}
