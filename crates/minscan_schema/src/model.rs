//! Relational schema model: tables and columns as the database reports them.

use serde::{Deserialize, Serialize};

/// A single column as declared in the database.
///
/// `declared_type` is the raw type string reported by the engine
/// (`varchar(255)`, `int`, ...), kept verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub declared_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// A table with its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// The full schema of one database.
///
/// Tables keep their extraction order. Names are unique: pushing a table
/// under an existing name replaces that entry in place, so iteration order
/// never depends on when a table was last updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_table(&mut self, table: Table) {
        if let Some(existing) = self.tables.iter_mut().find(|t| t.name == table.name) {
            *existing = table;
        } else {
            self.tables.push(table);
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_table() -> Table {
        Table::new(
            "users",
            vec![
                Column::new("email", "varchar(255)"),
                Column::new("age", "int"),
            ],
        )
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut schema = Schema::new();
        schema.push_table(users_table());
        schema.push_table(Table::new("orders", vec![Column::new("total", "decimal(10,2)")]));
        schema.push_table(Table::new("audit_log", vec![]));

        let names: Vec<&str> = schema.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["users", "orders", "audit_log"]);
        assert_eq!(schema.table_count(), 3);
        assert_eq!(schema.column_count(), 3);
    }

    #[test]
    fn push_replaces_duplicate_in_place() {
        let mut schema = Schema::new();
        schema.push_table(users_table());
        schema.push_table(Table::new("orders", vec![]));
        schema.push_table(Table::new("users", vec![Column::new("id", "bigint")]));

        let names: Vec<&str> = schema.tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["users", "orders"]);
        assert_eq!(schema.table("users").unwrap().columns.len(), 1);
        assert_eq!(schema.table("users").unwrap().columns[0].name, "id");
    }

    #[test]
    fn lookup_by_name() {
        let mut schema = Schema::new();
        schema.push_table(users_table());

        assert!(schema.table("users").is_some());
        assert!(schema.table("missing").is_none());
        assert!(!schema.is_empty());
        assert!(Schema::new().is_empty());
    }

    #[test]
    fn serializes_with_raw_type_strings() {
        let mut schema = Schema::new();
        schema.push_table(users_table());

        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("varchar(255)"));

        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
