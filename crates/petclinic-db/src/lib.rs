//! Petclinic-DB: Database schema, migrations, and seed data
//!
//! This crate provides database functionality for petclinic using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database insert and read operations
//! - `seed` - The fixed clinic seed dataset
//!
//! # Example
//!
//! ```no_run
//! use petclinic_db::pool::{init_pool, get_conn};
//! use petclinic_db::seed::seed_clinic;
//!
//! let pool = init_pool("clinic.db").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let summary = seed_clinic(&conn).unwrap();
//! println!("Seeded {} owners", summary.owners);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
