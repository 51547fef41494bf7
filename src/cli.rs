use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petclinic")]
#[command(author, version, about = "Pet clinic database schema and seed tool")]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "clinic.db")]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the schema and insert the fixed seed rows
    Seed,

    /// Print row counts for the four tables
    Status,

    /// Display version information
    Version,
}
