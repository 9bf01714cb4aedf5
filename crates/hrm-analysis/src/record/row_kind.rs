//! Row kinds, decided from the label cell.

use hrm_core::constants::RESERVED_HEADER_LABELS;
use hrm_core::types::Cell;

/// What a row represents, judged by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Label is one of the reserved header tokens.
    Header,
    /// Label is free text naming a clinical event (trimmed).
    EventMarker(String),
    /// Numeric sequence label: a detected pattern.
    Pattern,
}

impl RowKind {
    pub fn of_label(label: &Cell) -> Self {
        match label {
            Cell::Text(raw) => {
                let text = raw.trim();
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    Self::Pattern
                } else if RESERVED_HEADER_LABELS.contains(&text) {
                    Self::Header
                } else {
                    Self::EventMarker(text.to_string())
                }
            }
            _ => Self::Pattern,
        }
    }
}
