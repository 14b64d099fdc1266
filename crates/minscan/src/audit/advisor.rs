//! Remediation recommendations and regulation citations for findings.

use minscan_schema::{Advisory, KeywordMatch};

/// Regulation citations keyed by column-name substring, in citation order.
///
/// The key set is narrower than the classifier vocabulary on purpose:
/// keywords without an entry here (`mobile`, `location`, `address`, ...)
/// fall back to the optional-requirement literal at render time, and the
/// `credit_card` entry only fires when the column name literally contains
/// that underscore form.
const REGULATION_MAP: &[(&str, &str)] = &[
    ("email", "GDPR 5.1(c), ISO 27701 §7.2.1"),
    ("phone", "GDPR 5.1(c), ISO 27701 §7.2.1"),
    ("credit_card", "PCI-DSS, ISO 27701 §7.2.1"),
    ("ip", "GDPR Recital 30, ISO 27701 §7.2.6"),
    ("birthday", "GDPR 5.1(c), ISO 27701 §7.4.6"),
    ("gender", "GDPR 5.1(c), ISO 27701 §7.2.1"),
    ("id", "GDPR 5.1(c), ISO 27701 §7.2.1"),
];

const RECOMMEND_IP: &str = "avoid long-term storage of user IP; anonymize by default";
const RECOMMEND_CREDIT_CARD: &str = "must be encrypted or replaced with a token";
const RECOMMEND_STATISTICAL: &str = "restrict to aggregate statistics; do not collect by default";
const RECOMMEND_DEFAULT: &str = "evaluate whether the field is operationally necessary";

/// Attach a recommendation and citations to one finding.
pub fn advise(finding: KeywordMatch) -> Advisory {
    let recommendation = recommend(&finding.column).to_string();
    let regulations = citations(&finding.column);
    Advisory {
        finding,
        recommendation,
        regulations,
    }
}

/// Advise every finding, preserving input order.
pub fn advise_all(findings: Vec<KeywordMatch>) -> Vec<Advisory> {
    findings.into_iter().map(advise).collect()
}

/// First-match-wins decision list over the raw column name.
///
/// Deliberately case-sensitive, unlike the classifier: `client_ip` takes the
/// IP rule while `Client_IP` falls through to the default.
fn recommend(column: &str) -> &'static str {
    if column.contains("ip") {
        RECOMMEND_IP
    } else if column.contains("credit_card") {
        RECOMMEND_CREDIT_CARD
    } else if column.contains("birthday") || column.contains("gender") {
        RECOMMEND_STATISTICAL
    } else {
        RECOMMEND_DEFAULT
    }
}

/// Every citation whose key occurs in the lowercased column name.
fn citations(column: &str) -> Vec<String> {
    let lowered = column.to_lowercase();
    REGULATION_MAP
        .iter()
        .filter(|(key, _)| lowered.contains(key))
        .map(|(_, citation)| (*citation).to_string())
        .collect()
}
