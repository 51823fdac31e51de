use crate::error::{ProcessingError, Result};
use crate::models::StateAverage;
use crate::utils::constants::{FORMAT_CSV, FORMAT_JSON, FORMAT_TABLE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Table,
}

impl ReportFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            FORMAT_JSON => Ok(ReportFormat::Json),
            FORMAT_CSV => Ok(ReportFormat::Csv),
            FORMAT_TABLE | "txt" => Ok(ReportFormat::Table),
            _ => Err(ProcessingError::Config(format!(
                "Unsupported output format: {}",
                format
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Table => "txt",
        }
    }
}

/// Renders state averages as JSON (output contract), CSV, or a text table.
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            format: ReportFormat::default(),
        }
    }

    pub fn with_format(mut self, format: &str) -> Result<Self> {
        self.format = ReportFormat::parse(format)?;
        Ok(self)
    }

    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn render(&self, averages: &BTreeMap<String, StateAverage>) -> Result<String> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(averages)?),
            ReportFormat::Csv => self.render_csv(averages),
            ReportFormat::Table => Ok(self.render_table(averages)),
        }
    }

    /// Write the report, creating parent directories as needed
    pub fn write_report(&self, averages: &BTreeMap<String, StateAverage>, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.render(averages)?)?;
        info!(path = %path.display(), states = averages.len(), "wrote state report");
        Ok(())
    }

    fn render_csv(&self, averages: &BTreeMap<String, StateAverage>) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "jurisdiction_code",
            "jurisdiction_name",
            "median_price",
            "sample_count",
        ])?;

        for average in averages.values() {
            writer.write_record([
                average.jurisdiction_code.clone(),
                average.jurisdiction_name.clone(),
                average
                    .median_price
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_default(),
                average.sample_count.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ProcessingError::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| ProcessingError::InvalidFormat(format!("CSV output not UTF-8: {}", e)))
    }

    fn render_table(&self, averages: &BTreeMap<String, StateAverage>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<4} {:<16} {:>8} {:>7}", "Code", "State", "100LL", "Samples");
        let _ = writeln!(out, "{}", "-".repeat(38));

        for average in averages.values() {
            let price = average
                .median_price
                .map(|p| format!("${:.2}", p))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:<4} {:<16} {:>8} {:>7}",
                average.jurisdiction_code, average.jurisdiction_name, price, average.sample_count
            );
        }

        out
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
