use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::core::{NameRecord, ReferenceTable, Sex};
use crate::dataset::NameSource;
use crate::error::{NameEngineError, Result};

/// Default directory holding the yearly files
pub const DEFAULT_DATA_DIR: &str = "Names";

/// Reads `yob<YEAR>.txt` files (`name,sex,count`, no header) from a directory
#[derive(Debug, Clone)]
pub struct FileNameSource {
    data_dir: PathBuf,
}

impl FileNameSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the dataset file for a birth year
    pub fn path_for(&self, birth_year: u32) -> PathBuf {
        self.data_dir.join(format!("yob{}.txt", birth_year))
    }
}

impl Default for FileNameSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl NameSource for FileNameSource {
    fn load(&self, sex: Sex, birth_year: u32) -> Result<ReferenceTable> {
        let path = self.path_for(birth_year);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(NameEngineError::NotFound { birth_year, path });
            }
            Err(e) => return Err(e.into()),
        };

        let records = parse_records(file)?;
        tracing::debug!("Read {} rows from {}", records.len(), path.display());

        let table = ReferenceTable::from_records(sex, birth_year, records);
        tracing::info!(
            "Loaded {} {} names for {} from {}",
            table.len(),
            sex,
            birth_year,
            path.display()
        );

        Ok(table)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Parse every row of a dataset; the first bad row fails the whole load
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<NameRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            NameEngineError::Format {
                line,
                message: e.to_string(),
            }
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != 3 {
            return Err(NameEngineError::Format {
                line,
                message: format!("expected 3 fields (name, sex, count), found {}", row.len()),
            });
        }

        let name = &row[0];
        if name.is_empty() {
            return Err(NameEngineError::Format {
                line,
                message: "empty name".to_string(),
            });
        }

        let sex: Sex = row[1].parse().map_err(|e: NameEngineError| NameEngineError::Format {
            line,
            message: e.to_string(),
        })?;

        let popularity: u64 = row[2].parse().map_err(|_| NameEngineError::Format {
            line,
            message: format!("invalid count '{}'", &row[2]),
        })?;

        records.push(NameRecord::new(name, sex, popularity));
    }

    Ok(records)
}
