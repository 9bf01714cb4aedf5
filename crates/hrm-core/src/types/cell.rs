//! Spreadsheet-like cell values.

use serde::{Deserialize, Serialize};

/// One value read from a pattern sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

/// One row of cells, in column order.
pub type Row = Vec<Cell>;

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Numeric value of the cell. Numeric text is accepted.
    /// Returns `None` for empty cells and non-numeric text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Empty => None,
        }
    }

    /// Value of a sensor amplitude cell. Only true numbers count; text in a
    /// sensor column is treated as non-numeric.
    pub fn as_sensor_value(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// True when the cell holds a positive sensor reading.
    pub fn is_active_sensor(&self) -> bool {
        self.as_sensor_value().is_some_and(|v| v > 0.0)
    }

    /// Integer view used for clock fields (hour/minute/second).
    pub fn as_whole(&self) -> Option<i64> {
        self.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)
    }

    /// Text content, if the cell holds text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display form used when a text view of any cell is required.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
