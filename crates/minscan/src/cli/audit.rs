//! The `audit` command: extract the schema, classify it, write the report.

use crate::cli::error::HelpfulError;
use crate::cli::output::print_table;
use anyhow::{Context, Result};
use minscan::audit;
use minscan_db::{ConnectionParams, MySqlSchemaSource, SchemaSource};
use minscan_schema::Advisory;
use minscan_sinks::{ReportVariant, XlsxReportSink};
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the audit command
#[derive(Debug)]
pub struct AuditArgs {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub output: Option<PathBuf>,
    pub no_regulations: bool,
    pub json: bool,
}

/// Machine-readable run summary for --json
#[derive(Debug, Serialize)]
struct AuditSummary {
    database: String,
    tables: usize,
    columns: usize,
    findings: usize,
    report: String,
}

/// Execute the audit command
pub fn run(args: AuditArgs) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(run_async(args))
}

async fn run_async(args: AuditArgs) -> Result<()> {
    let variant = report_variant(args.no_regulations);
    let output = resolve_output(args.output.clone(), variant);

    let source = MySqlSchemaSource::new(ConnectionParams {
        host: args.host.clone(),
        port: args.port,
        user: args.user.clone(),
        password: args.password.clone(),
        database: args.database.clone(),
    });

    let schema = source.extract_schema().await.map_err(|err| {
        HelpfulError::extraction_failed(&args.user, &args.host, args.port, &args.database, &err)
    })?;

    let advisories = audit::analyze(&schema);

    let mut sink = XlsxReportSink::new(&output, variant);
    sink.write(&advisories)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    let summary = AuditSummary {
        database: args.database,
        tables: schema.table_count(),
        columns: schema.column_count(),
        findings: advisories.len(),
        report: output.display().to_string(),
    };

    if args.json {
        output_json(&summary)?;
    } else {
        output_table(&advisories, &summary, variant);
    }

    Ok(())
}

fn report_variant(no_regulations: bool) -> ReportVariant {
    if no_regulations {
        ReportVariant::AdviceOnly
    } else {
        ReportVariant::WithRegulations
    }
}

/// Pick the output path: explicit flag, else the variant's default filename
/// in the working directory.
fn resolve_output(output: Option<PathBuf>, variant: ReportVariant) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(variant.default_filename()))
}

fn output_json(summary: &AuditSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn output_table(advisories: &[Advisory], summary: &AuditSummary, variant: ReportVariant) {
    if advisories.is_empty() {
        println!(
            "No sensitive columns found in `{}` ({} tables, {} columns scanned).",
            summary.database, summary.tables, summary.columns
        );
    } else {
        let mut headers = vec!["Table", "Column", "Data Type", "Keyword", "Recommendation"];
        if variant == ReportVariant::WithRegulations {
            headers.push("Regulations");
        }

        let rows = advisories
            .iter()
            .map(|advisory| {
                let mut row = vec![
                    advisory.finding.table.clone(),
                    advisory.finding.column.clone(),
                    advisory.finding.declared_type.clone(),
                    advisory.finding.keyword.clone(),
                    advisory.recommendation.clone(),
                ];
                if variant == ReportVariant::WithRegulations {
                    row.push(advisory.regulations_text());
                }
                row
            })
            .collect();
        print_table(&headers, rows);

        println!(
            "{} sensitive columns in `{}` ({} tables, {} columns scanned).",
            summary.findings, summary.database, summary.tables, summary.columns
        );
    }

    println!("Report generated: {}", summary.report);
}
