//! Findings produced by the analysis stages: keyword matches and the
//! advisories attached to them.

use serde::{Deserialize, Serialize};

/// Rendered in place of citations when no regulation entry applies.
pub const FALLBACK_CITATION: &str = "optional regulatory requirement";

/// One keyword hit on one column name.
///
/// The column name and declared type are carried verbatim; only the matching
/// is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub table: String,
    pub column: String,
    pub declared_type: String,
    /// The vocabulary entry found in the lowercased column name.
    pub keyword: String,
}

impl KeywordMatch {
    /// Human-readable reason, as it appears in the report.
    pub fn reason(&self) -> String {
        format!("column name contains keyword `{}`", self.keyword)
    }
}

/// A finding with remediation guidance and regulation citations attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub finding: KeywordMatch,
    pub recommendation: String,
    /// Citations in regulation-map order; may be empty.
    pub regulations: Vec<String>,
}

impl Advisory {
    /// Citations joined for display, or the fallback when none apply.
    pub fn regulations_text(&self) -> String {
        if self.regulations.is_empty() {
            FALLBACK_CITATION.to_string()
        } else {
            self.regulations.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_match() -> KeywordMatch {
        KeywordMatch {
            table: "users".to_string(),
            column: "email".to_string(),
            declared_type: "varchar(255)".to_string(),
            keyword: "email".to_string(),
        }
    }

    #[test]
    fn reason_quotes_the_keyword() {
        assert_eq!(
            email_match().reason(),
            "column name contains keyword `email`"
        );
    }

    #[test]
    fn regulations_text_joins_in_order() {
        let advisory = Advisory {
            finding: email_match(),
            recommendation: "evaluate whether the field is operationally necessary".to_string(),
            regulations: vec![
                "GDPR 5.1(c), ISO 27701 §7.2.1".to_string(),
                "GDPR Recital 30, ISO 27701 §7.2.6".to_string(),
            ],
        };
        assert_eq!(
            advisory.regulations_text(),
            "GDPR 5.1(c), ISO 27701 §7.2.1, GDPR Recital 30, ISO 27701 §7.2.6"
        );
    }

    #[test]
    fn empty_regulations_fall_back() {
        let advisory = Advisory {
            finding: email_match(),
            recommendation: String::new(),
            regulations: Vec::new(),
        };
        assert_eq!(advisory.regulations_text(), FALLBACK_CITATION);
    }
}
