// src/output/csv.rs
//! CSV output handler

use crate::output::OutputHandler;
use crate::types::Sighting;
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Mutex;

/// CSV output handler built on the csv crate; the header row comes from the
/// Sighting field names
pub struct CsvOutput {
    writer: Mutex<csv::Writer<Box<dyn Write + Send>>>,
}

impl CsvOutput {
    /// Create a new CsvOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(csv::Writer::from_writer(
                Box::new(io::stdout()) as Box<dyn Write + Send>
            )),
        }
    }

    /// Create a new CsvOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self {
            writer: Mutex::new(csv::Writer::from_writer(
                Box::new(file) as Box<dyn Write + Send>
            )),
        }
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputHandler for CsvOutput {
    async fn emit_report(&self, rows: &[Sighting]) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap();

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    async fn flush(&self) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.flush()?;
        Ok(())
    }
}
