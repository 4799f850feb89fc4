use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TableError;

/// Header cell metadata supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub title: String,
    /// Width in density-independent units, passed through to the renderer
    pub width: u32,
    /// Field looked up in each row; defaults to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ColumnHeader {
    pub fn new(width: u32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width,
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.title)
    }

    /// Parses `key:width` or `key:width:Title`
    pub fn parse(spec: &str) -> Result<Self, TableError> {
        let mut parts = spec.splitn(3, ':');
        let key = parts.next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(TableError::InvalidConfig(format!(
                "column '{spec}' has no key"
            )));
        }

        let width = match parts.next() {
            Some(width) => width.trim().parse::<u32>().map_err(|_| {
                TableError::InvalidConfig(format!("column '{spec}' has an invalid width"))
            })?,
            None => key.len() as u32,
        };

        let header = match parts.next() {
            Some(title) if !title.trim().is_empty() => {
                ColumnHeader::new(width, title.trim()).with_key(key)
            }
            _ => ColumnHeader::new(width, key),
        };
        Ok(header)
    }
}

/// A value the table can split into one text cell per header
pub trait TableRow {
    fn cells(&self, headers: &[ColumnHeader]) -> Result<Vec<String>, TableError>;
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl TableRow for Value {
    fn cells(&self, headers: &[ColumnHeader]) -> Result<Vec<String>, TableError> {
        match self {
            Value::Object(fields) => Ok(headers
                .iter()
                .map(|header| fields.get(header.key()).map(cell_text).unwrap_or_default())
                .collect()),
            Value::Array(values) => Ok((0..headers.len())
                .map(|position| values.get(position).map(cell_text).unwrap_or_default())
                .collect()),
            scalar => {
                if headers.is_empty() {
                    return Err(TableError::InvalidRow(
                        "scalar row needs at least one column".to_string(),
                    ));
                }
                let mut cells = vec![String::new(); headers.len()];
                cells[0] = cell_text(scalar);
                Ok(cells)
            }
        }
    }
}

impl TableRow for Vec<String> {
    fn cells(&self, headers: &[ColumnHeader]) -> Result<Vec<String>, TableError> {
        if self.len() != headers.len() {
            return Err(TableError::InvalidRow(format!(
                "row has {} cells but the table has {} columns",
                self.len(),
                headers.len()
            )));
        }
        Ok(self.clone())
    }
}
