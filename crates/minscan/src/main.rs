//! Minscan unified CLI.
//!
//! Scans one MySQL database schema for columns whose names suggest personal
//! data, attaches minimization advisories, and writes a spreadsheet report.

use clap::{Parser, Subcommand};
use minscan_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "minscan", about = "Database PII minimization scanner")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a database schema and write the minimization report
    Audit {
        /// MySQL host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// MySQL port
        #[arg(long, default_value = "3306")]
        port: u16,

        /// MySQL user
        #[arg(long, default_value = "root")]
        user: String,

        /// MySQL password
        #[arg(long, env = "MINSCAN_DB_PASSWORD", default_value = "")]
        password: String,

        /// Database to scan
        #[arg(long)]
        database: String,

        /// Report path (defaults to the variant's standard filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the regulation citation column from the report
        #[arg(long)]
        no_regulations: bool,

        /// Output a JSON summary instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Extract and display the database schema without analyzing it
    Schema {
        /// MySQL host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// MySQL port
        #[arg(long, default_value = "3306")]
        port: u16,

        /// MySQL user
        #[arg(long, default_value = "root")]
        user: String,

        /// MySQL password
        #[arg(long, env = "MINSCAN_DB_PASSWORD", default_value = "")]
        password: String,

        /// Database to inspect
        #[arg(long)]
        database: String,

        /// Output the schema as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Audit {
            host,
            port,
            user,
            password,
            database,
            output,
            no_regulations,
            json,
        } => cli::audit::run(cli::audit::AuditArgs {
            host,
            port,
            user,
            password,
            database,
            output,
            no_regulations,
            json,
        }),
        Commands::Schema {
            host,
            port,
            user,
            password,
            database,
            json,
        } => cli::schema::run(cli::schema::SchemaArgs {
            host,
            port,
            user,
            password,
            database,
            json,
        }),
    }
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Audit { json, .. } | Commands::Schema { json, .. } => *json,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    // Keep the appender guard alive for the whole run so buffered log lines
    // are flushed on exit.
    let _log_guard = match init_logging(LogConfig {
        app_name: "minscan",
        verbose: cli.verbose,
    }) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Warning: failed to initialize logging: {}", err);
            None
        }
    };

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}
