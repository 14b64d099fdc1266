//! Report sinks for minscan.
//!
//! The sink receives finished advisories and writes them to a spreadsheet,
//! one row per advisory under a localized header row. Writes are staged to a
//! temp file and promoted by rename so a failure never leaves a partial
//! report at the destination.

use minscan_schema::Advisory;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned while writing a report.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Filesystem failure while staging or promoting the report.
    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be built or serialized.
    #[error("Workbook write failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Which columns the report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    /// Table, column, declared type, match reason and recommendation.
    AdviceOnly,
    /// The advice columns plus applicable regulation citations.
    WithRegulations,
}

impl ReportVariant {
    /// Default output filename for this variant.
    pub fn default_filename(self) -> &'static str {
        match self {
            ReportVariant::AdviceOnly => "minimization_report.xlsx",
            ReportVariant::WithRegulations => "minimization_report_with_regulations.xlsx",
        }
    }

    fn headers(self) -> &'static [&'static str] {
        match self {
            ReportVariant::AdviceOnly => {
                &["Table", "Column", "Data Type", "Reason", "Recommendation"]
            }
            ReportVariant::WithRegulations => &[
                "Table",
                "Column",
                "Data Type",
                "Reason",
                "Recommendation",
                "Applicable Regulations",
            ],
        }
    }
}

/// Writes advisories to an xlsx workbook.
pub struct XlsxReportSink {
    final_path: PathBuf,
    /// Staging path next to the destination, removed on drop if never
    /// promoted.
    temp_path: PathBuf,
    variant: ReportVariant,
    rows_written: u64,
    committed: bool,
}

impl XlsxReportSink {
    pub fn new(path: impl Into<PathBuf>, variant: ReportVariant) -> Self {
        let final_path = path.into();
        let temp_path = temp_path_for(&final_path);
        Self {
            final_path,
            temp_path,
            variant,
            rows_written: 0,
            committed: false,
        }
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Build the workbook and promote it into place.
    ///
    /// Returns the number of advisory rows written, not counting the header.
    /// An empty slice still produces a valid header-only workbook.
    pub fn write(&mut self, advisories: &[Advisory]) -> SinkResult<u64> {
        if let Some(parent) = self.final_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!(
            "Initializing xlsx report sink: {} (temp: {})",
            self.final_path.display(),
            self.temp_path.display()
        );

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in self.variant.headers().iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (idx, advisory) in advisories.iter().enumerate() {
            let row = (idx + 1) as u32;
            let reason = advisory.finding.reason();
            worksheet.write_string(row, 0, advisory.finding.table.as_str())?;
            worksheet.write_string(row, 1, advisory.finding.column.as_str())?;
            worksheet.write_string(row, 2, advisory.finding.declared_type.as_str())?;
            worksheet.write_string(row, 3, reason.as_str())?;
            worksheet.write_string(row, 4, advisory.recommendation.as_str())?;
            if self.variant == ReportVariant::WithRegulations {
                worksheet.write_string(row, 5, advisory.regulations_text().as_str())?;
            }
            self.rows_written += 1;
            debug!(
                "Wrote advisory row {} ({}.{})",
                row, advisory.finding.table, advisory.finding.column
            );
        }

        workbook.save(&self.temp_path)?;
        std::fs::rename(&self.temp_path, &self.final_path)?;
        self.committed = true;

        info!(
            "Committed xlsx report: {} ({} rows)",
            self.final_path.display(),
            self.rows_written
        );
        Ok(self.rows_written)
    }
}

impl Drop for XlsxReportSink {
    fn drop(&mut self) {
        // Cleanup staging file if we never promoted it
        if !self.committed && self.temp_path.exists() {
            let _ = std::fs::remove_file(&self.temp_path);
            warn!("Cleaned up orphaned temp file: {}", self.temp_path.display());
        }
    }
}

fn temp_path_for(final_path: &Path) -> PathBuf {
    let file_name = final_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.xlsx".to_string());
    final_path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minscan_schema::KeywordMatch;
    use std::io::Read;

    fn advisory(
        table: &str,
        column: &str,
        declared_type: &str,
        keyword: &str,
        recommendation: &str,
        regulations: &[&str],
    ) -> Advisory {
        Advisory {
            finding: KeywordMatch {
                table: table.to_string(),
                column: column.to_string(),
                declared_type: declared_type.to_string(),
                keyword: keyword.to_string(),
            },
            recommendation: recommendation.to_string(),
            regulations: regulations.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// All XML content of the workbook, concatenated. String cells may live
    /// in the shared-strings part, so assertions scan every entry.
    fn workbook_text(path: &Path) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut all = String::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).unwrap();
            if entry.name().ends_with(".xml") {
                let mut contents = String::new();
                entry.read_to_string(&mut contents).unwrap();
                all.push_str(&contents);
            }
        }
        all
    }

    fn sheet_row_count(path: &Path) -> usize {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        sheet.matches("<row").count()
    }

    #[test]
    fn writes_one_row_per_advisory_plus_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let advisories = vec![
            advisory(
                "users",
                "email",
                "varchar(255)",
                "email",
                "evaluate whether the field is operationally necessary",
                &["GDPR 5.1(c), ISO 27701 §7.2.1"],
            ),
            advisory(
                "logs",
                "client_ip",
                "varchar(45)",
                "ip",
                "avoid long-term storage of user IP; anonymize by default",
                &["GDPR Recital 30, ISO 27701 §7.2.6"],
            ),
        ];

        let mut sink = XlsxReportSink::new(&path, ReportVariant::WithRegulations);
        let rows = sink.write(&advisories).unwrap();

        assert_eq!(rows, 2);
        assert!(path.exists());
        assert_eq!(sheet_row_count(&path), 3);

        let text = workbook_text(&path);
        assert!(text.contains("Applicable Regulations"));
        assert!(text.contains("users"));
        assert!(text.contains("client_ip"));
        assert!(text.contains("column name contains keyword `email`"));
        assert!(text.contains("GDPR Recital 30, ISO 27701 §7.2.6"));
    }

    #[test]
    fn empty_input_produces_header_only_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        let mut sink = XlsxReportSink::new(&path, ReportVariant::WithRegulations);
        let rows = sink.write(&[]).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(sheet_row_count(&path), 1);

        let text = workbook_text(&path);
        assert!(text.contains("Table"));
        assert!(text.contains("Recommendation"));
    }

    #[test]
    fn advice_only_variant_omits_regulations_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("advice.xlsx");

        let advisories = vec![advisory(
            "users",
            "gender",
            "char(1)",
            "gender",
            "restrict to aggregate statistics; do not collect by default",
            &[],
        )];

        let mut sink = XlsxReportSink::new(&path, ReportVariant::AdviceOnly);
        sink.write(&advisories).unwrap();

        let text = workbook_text(&path);
        assert!(text.contains("Recommendation"));
        assert!(!text.contains("Applicable Regulations"));
        assert!(!text.contains("optional regulatory requirement"));
    }

    #[test]
    fn fallback_citation_is_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fallback.xlsx");

        let advisories = vec![advisory(
            "customers",
            "mobile",
            "varchar(20)",
            "mobile",
            "evaluate whether the field is operationally necessary",
            &[],
        )];

        let mut sink = XlsxReportSink::new(&path, ReportVariant::WithRegulations);
        sink.write(&advisories).unwrap();

        assert!(workbook_text(&path).contains("optional regulatory requirement"));
    }

    #[test]
    fn no_temp_file_left_after_commit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.xlsx");

        let mut sink = XlsxReportSink::new(&path, ReportVariant::AdviceOnly);
        sink.write(&[]).unwrap();
        drop(sink);

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn default_filenames_per_variant() {
        assert_eq!(
            ReportVariant::AdviceOnly.default_filename(),
            "minimization_report.xlsx"
        );
        assert_eq!(
            ReportVariant::WithRegulations.default_filename(),
            "minimization_report_with_regulations.xlsx"
        );
    }
}
