use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::pagination::OverflowPolicy;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Settings shared by every table built from the same host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows shown on each page
    pub rows_per_page: usize,
    /// How a cursor past the last page is resolved
    pub overflow: OverflowPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            overflow: OverflowPolicy::ClampToLastPage,
        }
    }
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        log::debug!("Loading table config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows_per_page == 0 {
            return Err(TableError::InvalidConfig(
                "rows_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
