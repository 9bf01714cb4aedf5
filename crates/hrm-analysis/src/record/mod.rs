//! Pattern rows: column layout, label kinds, and typed records.

pub mod layout;
pub mod pattern_record;
pub mod row_kind;

pub use layout::RowLayout;
pub use pattern_record::PatternRecord;
pub use row_kind::RowKind;
