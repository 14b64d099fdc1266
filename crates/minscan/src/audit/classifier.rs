//! Column-name classification against the sensitive keyword vocabulary.

use minscan_schema::{KeywordMatch, Schema};
use tracing::debug;

/// Column-name substrings that indicate personal data, in report order.
///
/// Matching lowercases the column name first; the vocabulary itself is
/// lowercase.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "name", "email", "phone", "mobile", "birthday", "birth", "gender", "card", "ip", "id",
    "location", "address",
];

/// Flag every column whose name contains a sensitive keyword.
///
/// One match is emitted per (column, keyword) pair, so a column can appear
/// several times. Output order is schema order, then column order, then
/// vocabulary order, which keeps reports diffable across runs.
pub fn classify(schema: &Schema) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();
    for table in schema.tables() {
        for column in &table.columns {
            let lowered = column.name.to_lowercase();
            for keyword in SENSITIVE_KEYWORDS {
                if lowered.contains(keyword) {
                    matches.push(KeywordMatch {
                        table: table.name.clone(),
                        column: column.name.clone(),
                        declared_type: column.declared_type.clone(),
                        keyword: (*keyword).to_string(),
                    });
                }
            }
        }
    }
    debug!(matches = matches.len(), "classified schema");
    matches
}
