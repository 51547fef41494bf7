mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

use petclinic_db::pool::{get_conn, init_pool};
use petclinic_db::queries::{appointments, owners, pets, veterinarians};
use petclinic_db::seed::seed_clinic;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "petclinic=trace,petclinic_db=debug,petclinic_common=debug".to_string()
        } else {
            "petclinic=info,petclinic_db=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Seed => seed(&cli.db),
        Commands::Status => status(&cli.db),
        Commands::Version => {
            println!("petclinic {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn seed(db_path: &Path) -> Result<()> {
    let db_path_str = db_path.to_string_lossy();
    tracing::info!("Initializing database at {}", db_path_str);

    let pool = init_pool(&db_path_str)?;
    let conn = get_conn(&pool)?;

    // Any constraint violation aborts the whole seed; errors bubble out of
    // main and terminate the process.
    let summary = seed_clinic(&conn)?;

    println!(
        "Seeded {}: {} owners, {} pets, {} veterinarians, {} appointments",
        db_path_str, summary.owners, summary.pets, summary.veterinarians, summary.appointments
    );

    Ok(())
}

fn status(db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        anyhow::bail!("Database file does not exist: {:?}", db_path);
    }

    let db_path_str = db_path.to_string_lossy();
    let pool = init_pool(&db_path_str)?;
    let conn = get_conn(&pool)?;

    println!("owners:         {}", owners::count_owners(&conn)?);
    println!("pets:           {}", pets::count_pets(&conn)?);
    println!("veterinarians:  {}", veterinarians::count_veterinarians(&conn)?);
    println!("appointments:   {}", appointments::count_appointments(&conn)?);

    Ok(())
}
