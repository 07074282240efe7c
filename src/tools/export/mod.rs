//! Record accumulation and export
//!
//! Records are buffered until the roster is exhausted because the column
//! header comes from the first record and must be known before any row is
//! written.


pub mod types;

pub use types::*;

use crate::engine::TableWriter;
use crate::error::Result;
use crate::tools::types::Record;

/// Header for `records`: the first record's keys with `school_name` moved to
/// the front. Columns that only appear in later records are not added.
pub fn header_for(records: &[Record]) -> Option<Vec<String>> {
    let first = records.first()?;
    let mut header = vec![SCHOOL_NAME_KEY.to_string()];
    header.extend(
        first
            .keys()
            .filter(|k| *k != SCHOOL_NAME_KEY)
            .map(str::to_string),
    );
    Some(header)
}

/// In-memory accumulator of school records, in arrival order.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<Record>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn header(&self) -> Option<Vec<String>> {
        header_for(&self.records)
    }

    /// Hand every record to `writer` under the derived header.
    pub fn export(&self, writer: &dyn TableWriter) -> Result<ExportOutcome> {
        let Some(header) = self.header() else {
            return Ok(ExportOutcome::Nothing);
        };
        writer.write_records(&header, &self.records)?;
        Ok(ExportOutcome::Written {
            count: self.records.len(),
            target: writer.target(),
        })
    }
}
