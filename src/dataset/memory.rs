use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::{NameRecord, ReferenceTable, Sex};
use crate::dataset::NameSource;
use crate::error::{NameEngineError, Result};

/// In-memory dataset, keyed by birth year
#[derive(Debug, Clone, Default)]
pub struct InMemoryNameSource {
    years: HashMap<u32, Vec<NameRecord>>,
}

impl InMemoryNameSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the records of one birth year
    pub fn with_year(mut self, birth_year: u32, records: Vec<NameRecord>) -> Self {
        self.years.insert(birth_year, records);
        self
    }
}

impl NameSource for InMemoryNameSource {
    fn load(&self, sex: Sex, birth_year: u32) -> Result<ReferenceTable> {
        let records = self
            .years
            .get(&birth_year)
            .ok_or_else(|| NameEngineError::NotFound {
                birth_year,
                path: PathBuf::from(format!("<memory>/{}", birth_year)),
            })?;

        Ok(ReferenceTable::from_records(sex, birth_year, records.iter().cloned()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let source = InMemoryNameSource::new().with_year(
            2020,
            vec![
                NameRecord::new("Ann", Sex::Female, 1),
                NameRecord::new("Andy", Sex::Male, 2),
            ],
        );

        let table = source.load(Sex::Female, 2020).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].name, "Ann");

        assert!(matches!(
            source.load(Sex::Female, 2019),
            Err(NameEngineError::NotFound { birth_year: 2019, .. })
        ));
    }
}
