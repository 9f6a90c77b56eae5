pub mod file;
pub mod memory;

use crate::core::{ReferenceTable, Sex};
use crate::error::Result;

pub use file::FileNameSource;
pub use memory::InMemoryNameSource;

/// Trait for name dataset implementations
pub trait NameSource: Send + Sync {
    /// Load the records of `sex` for `birth_year`, in source order
    fn load(&self, sex: Sex, birth_year: u32) -> Result<ReferenceTable>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
