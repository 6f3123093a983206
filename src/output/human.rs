// src/output/human.rs
//! Grid-formatted table output

use crate::output::OutputHandler;
use crate::types::Sighting;
use async_trait::async_trait;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Mutex;

const HEADERS: [&str; 5] = [
    "common_name",
    "issuer_ca_id",
    "not_before",
    "not_after",
    "status_code",
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the report as a grid table, with colored status codes when
/// writing to a terminal
pub struct HumanOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
}

impl HumanOutput {
    /// Create a new HumanOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            use_colors: is_terminal::is_terminal(std::io::stdout()),
        }
    }

    /// Create a new HumanOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self {
            writer: Mutex::new(Box::new(file)),
            use_colors: false, // No colors when writing to file
        }
    }

    fn cells(row: &Sighting) -> [String; 5] {
        [
            row.common_name.clone(),
            row.issuer_ca_id.to_string(),
            row.not_before.format(TIME_FORMAT).to_string(),
            row.not_after.format(TIME_FORMAT).to_string(),
            row.status_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn column_widths(rows: &[Sighting]) -> [usize; 5] {
        let mut widths = [0usize; 5];
        for (i, h) in HEADERS.iter().enumerate() {
            widths[i] = h.len();
        }

        for row in rows {
            for (i, cell) in Self::cells(row).iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        widths
    }

    fn separator(widths: &[usize; 5], fill: char) -> String {
        let mut line = String::from("+");
        for w in widths {
            for _ in 0..(w + 2) {
                line.push(fill);
            }
            line.push('+');
        }
        line
    }

    fn colorize_status(padded: String, code: Option<u16>) -> String {
        match code {
            Some(c) if (200..300).contains(&c) => padded.green().to_string(),
            Some(c) if (300..400).contains(&c) => padded.yellow().to_string(),
            Some(c) if (400..500).contains(&c) => padded.red().to_string(),
            Some(_) => padded.magenta().to_string(),
            None => padded.dimmed().to_string(),
        }
    }

    /// Render the full grid table as a string
    fn render(&self, rows: &[Sighting]) -> String {
        let widths = Self::column_widths(rows);
        let row_sep = Self::separator(&widths, '-');
        let header_sep = Self::separator(&widths, '=');

        let mut out = String::new();
        out.push_str(&row_sep);
        out.push('\n');

        out.push('|');
        for (i, h) in HEADERS.iter().enumerate() {
            out.push_str(&format!(" {:<width$} |", h, width = widths[i]));
        }
        out.push('\n');
        out.push_str(&header_sep);
        out.push('\n');

        for row in rows {
            out.push('|');
            for (i, cell) in Self::cells(row).iter().enumerate() {
                let padded = format!("{:<width$}", cell, width = widths[i]);
                // Colors are applied after padding so widths stay aligned
                let rendered = if self.use_colors && i == 4 {
                    Self::colorize_status(padded, row.status_code)
                } else {
                    padded
                };
                out.push_str(&format!(" {} |", rendered));
            }
            out.push('\n');
            out.push_str(&row_sep);
            out.push('\n');
        }

        out
    }
}

impl Default for HumanOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputHandler for HumanOutput {
    async fn emit_report(&self, rows: &[Sighting]) -> anyhow::Result<()> {
        let mut writer = self.writer.lock().unwrap();

        if rows.is_empty() {
            writeln!(writer, "No certificates found.")?;
        } else {
            write!(writer, "{}", self.render(rows))?;
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
