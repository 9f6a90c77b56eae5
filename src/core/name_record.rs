use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NameEngineError;

/// Sex column of the name dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Single-letter code used in dataset files and output names
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = NameEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "f" => Ok(Sex::Female),
            "M" | "m" => Ok(Sex::Male),
            other => Err(NameEngineError::InvalidSex(other.to_string())),
        }
    }
}

/// One row of the dataset: a name given to babies of one sex in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub sex: Sex,
    /// Count as given by the dataset, never recomputed
    pub popularity: u64,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, sex: Sex, popularity: u64) -> Self {
        Self {
            name: name.into(),
            sex,
            popularity,
        }
    }
}

/// Sex-filtered records for one birth year, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub sex: Sex,
    pub birth_year: u32,
    records: Vec<NameRecord>,
}

impl ReferenceTable {
    /// Build a table keeping only records of `sex`, order preserved
    pub fn from_records<I>(sex: Sex, birth_year: u32, records: I) -> Self
    where
        I: IntoIterator<Item = NameRecord>,
    {
        let records = records.into_iter().filter(|r| r.sex == sex).collect();
        Self {
            sex,
            birth_year,
            records,
        }
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parsing() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert!(matches!(
            "X".parse::<Sex>(),
            Err(NameEngineError::InvalidSex(s)) if s == "X"
        ));
    }

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Female.to_string(), "F");
        assert_eq!(Sex::Male.to_string(), "M");
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let records = vec![
            NameRecord::new("Olivia", Sex::Female, 17535),
            NameRecord::new("Liam", Sex::Male, 19659),
            NameRecord::new("Emma", Sex::Female, 15581),
            NameRecord::new("Noah", Sex::Male, 18252),
            NameRecord::new("Ava", Sex::Female, 13084),
        ];

        let table = ReferenceTable::from_records(Sex::Female, 2020, records);
        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Olivia", "Emma", "Ava"]);
        assert_eq!(table.birth_year, 2020);
    }

    #[test]
    fn test_filter_matching_nothing_is_empty() {
        let records = vec![NameRecord::new("Liam", Sex::Male, 19659)];
        let table = ReferenceTable::from_records(Sex::Female, 2020, records);
        assert!(table.is_empty());
    }
}
