//! The `schema` command: extract and display the schema without analyzing it.

use crate::cli::error::HelpfulError;
use crate::cli::output::print_table;
use anyhow::Result;
use minscan_db::{ConnectionParams, MySqlSchemaSource, SchemaSource};
use minscan_schema::Schema;

/// Arguments for the schema command
#[derive(Debug)]
pub struct SchemaArgs {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub json: bool,
}

/// Execute the schema command
pub fn run(args: SchemaArgs) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(run_async(args))
}

async fn run_async(args: SchemaArgs) -> Result<()> {
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

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
    } else {
        output_listing(&args.database, &schema);
    }

    Ok(())
}

fn output_listing(database: &str, schema: &Schema) {
    if schema.is_empty() {
        println!("Database `{}` has no tables.", database);
        return;
    }

    println!("Database structure for `{}`:", database);

    let rows = schema
        .tables()
        .iter()
        .flat_map(|table| {
            table.columns.iter().map(|column| {
                vec![
                    table.name.clone(),
                    column.name.clone(),
                    column.declared_type.clone(),
                ]
            })
        })
        .collect();
    print_table(&["Table", "Column", "Data Type"], rows);

    println!(
        "{} tables, {} columns.",
        schema.table_count(),
        schema.column_count()
    );
}
