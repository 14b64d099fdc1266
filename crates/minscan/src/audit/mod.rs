//! Schema audit pipeline: classify columns, attach advisories.
//!
//! Both stages are pure functions over the extracted schema. The CLI
//! composes them with a `SchemaSource` backend on one side and a report
//! sink on the other.

pub mod advisor;
pub mod classifier;

pub use advisor::{advise, advise_all};
pub use classifier::{classify, SENSITIVE_KEYWORDS};

use minscan_schema::{Advisory, Schema};
use tracing::info;

/// Classify every column of the schema and attach advisories.
pub fn analyze(schema: &Schema) -> Vec<Advisory> {
    let findings = classify(schema);
    info!(
        tables = schema.table_count(),
        columns = schema.column_count(),
        findings = findings.len(),
        "schema analyzed"
    );
    advise_all(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minscan_schema::{Column, Table};

    #[test]
    fn empty_schema_yields_no_advisories() {
        assert!(analyze(&Schema::new()).is_empty());
    }

    #[test]
    fn users_email_end_to_end() {
        let mut schema = Schema::new();
        schema.push_table(Table::new(
            "users",
            vec![
                Column::new("email", "varchar(255)"),
                Column::new("age", "int"),
            ],
        ));

        let advisories = analyze(&schema);
        assert_eq!(advisories.len(), 1);

        let advisory = &advisories[0];
        assert_eq!(advisory.finding.table, "users");
        assert_eq!(advisory.finding.column, "email");
        assert_eq!(advisory.finding.declared_type, "varchar(255)");
        assert_eq!(advisory.finding.keyword, "email");
        assert_eq!(
            advisory.recommendation,
            "evaluate whether the field is operationally necessary"
        );
        assert_eq!(
            advisory.regulations,
            vec!["GDPR 5.1(c), ISO 27701 §7.2.1".to_string()]
        );
    }

    #[test]
    fn analyze_is_deterministic() {
        let mut schema = Schema::new();
        schema.push_table(Table::new(
            "customers",
            vec![
                Column::new("full_name", "varchar(120)"),
                Column::new("phone", "varchar(20)"),
            ],
        ));

        assert_eq!(analyze(&schema), analyze(&schema));
    }
}
