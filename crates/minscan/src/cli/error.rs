//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use minscan_db::DbError;
use std::fmt;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a suggestion for fixing the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(
        mut self,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suggestions
            .extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    // === Common error constructors ===

    /// Schema extraction failed at the database layer
    pub fn extraction_failed(
        user: &str,
        host: &str,
        port: u16,
        database: &str,
        err: &DbError,
    ) -> Self {
        let target = format!("{}@{}:{}/{}", user, host, port, database);
        match err {
            DbError::Connection(_) => Self::new("Failed to connect to database")
                .with_context(format!("Target: {}", target))
                .with_suggestions([
                    format!("Error: {}", err),
                    "TRY: Check that the MySQL server is running and the host/port are reachable"
                        .to_string(),
                    "TRY: Verify the user and password (or set MINSCAN_DB_PASSWORD)".to_string(),
                    format!(
                        "TRY: Confirm the database exists: SHOW DATABASES LIKE '{}'",
                        database
                    ),
                ]),
            DbError::Query(_) => Self::new("Schema extraction failed")
                .with_context(format!("Target: {}", target))
                .with_suggestions([
                    format!("Error: {}", err),
                    "TRY: Confirm the user can read information_schema for this database"
                        .to_string(),
                ]),
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Print an error as a JSON object on stderr (for --json consumers)
pub fn print_json_error(err: &anyhow::Error) {
    let body = serde_json::json!({
        "error": err.to_string(),
        "causes": err.chain().skip(1).map(|cause| cause.to_string()).collect::<Vec<_>>(),
    });
    eprintln!("{}", body);
}
