use crate::{engine::TableWriter, error::*, tools::types::Record};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "school_details.csv";

/// Writes the result table as a comma-separated file.
pub struct CsvFileWriter {
    path: PathBuf,
}

impl CsvFileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvFileWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl TableWriter for CsvFileWriter {
    fn name(&self) -> &'static str {
        "csv-file"
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn write_records(&self, header: &[String], records: &[Record]) -> Result<()> {
        let file = std::fs::File::create(&self.path)?;
        write_csv(file, header, records)
    }
}

/// Header line, then one row per record with fields matched by column id.
/// Fields a record lacks are left empty.
pub fn write_csv<W: Write>(out: W, header: &[String], records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(header)?;
    for record in records {
        writer.write_record(header.iter().map(|column| record.get(column).unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}
