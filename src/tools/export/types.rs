use serde::Serialize;

/// Column that always leads the export.
pub const SCHOOL_NAME_KEY: &str = "school_name";

/// What the export step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExportOutcome {
    /// No records were collected; nothing was written.
    Nothing,
    /// `count` records were written to `target`.
    Written { count: usize, target: String },
}
