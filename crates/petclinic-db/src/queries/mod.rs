//! Database query modules.
//!
//! This module organizes database operations by table:
//! - owners: Owner inserts and reads
//! - pets: Pet inserts and reads
//! - veterinarians: Veterinarian inserts and reads
//! - appointments: Appointment inserts and reads
//!
//! The schema is populated once by the seed routine; there are no update or
//! delete operations.

pub mod appointments;
pub mod owners;
pub mod pets;
pub mod veterinarians;
