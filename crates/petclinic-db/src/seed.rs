//! The fixed clinic seed dataset.
//!
//! This module inserts the illustrative clinic rows: three owners, six pets,
//! two veterinarians, and six appointments. Everything happens inside a
//! single transaction; any constraint violation (e.g. a duplicate email from
//! an earlier run) rolls the whole seed back.

use chrono::{Duration, Utc};
use petclinic_common::{AppointmentStatus, Result};
use rusqlite::Connection;
use serde::Serialize;

use crate::queries::{appointments, owners, pets, veterinarians};

/// Row counts produced by a successful seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub owners: usize,
    pub pets: usize,
    pub veterinarians: usize,
    pub appointments: usize,
}

/// Populate the clinic database with the fixed seed rows.
///
/// Inserts three owners, six pets (two per owner), two veterinarians, and
/// six appointments (one per pet, alternating veterinarians), committing
/// them as a single transaction. Seeding a database that already holds the
/// rows fails on the unique email constraint and leaves it unchanged.
///
/// # Returns
///
/// * `Ok(SeedSummary)` - Row counts for the four tables
/// * `Err(Error)` - If any insert violates a constraint; nothing is persisted
pub fn seed_clinic(conn: &Connection) -> Result<SeedSummary> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| petclinic_common::Error::database(e.to_string()))?;

    let alice = owners::create_owner(&tx, "Alice Johnson", "555-0101", "alice.johnson@example.com")?;
    let bob = owners::create_owner(&tx, "Bob Smith", "555-0202", "bob.smith@example.com")?;
    let carol = owners::create_owner(&tx, "Carol Davis", "555-0303", "carol.davis@example.com")?;

    let seeded_pets = [
        pets::create_pet(&tx, "Buddy", "Dog", Some("Golden Retriever"), Some(3), alice.id)?,
        pets::create_pet(&tx, "Whiskers", "Cat", Some("Siamese"), Some(2), alice.id)?,
        pets::create_pet(&tx, "Rex", "Dog", Some("German Shepherd"), Some(5), bob.id)?,
        pets::create_pet(&tx, "Goldie", "Fish", None, Some(1), bob.id)?,
        pets::create_pet(&tx, "Luna", "Cat", Some("Maine Coon"), Some(4), carol.id)?,
        pets::create_pet(&tx, "Coco", "Parrot", Some("African Grey"), Some(7), carol.id)?,
    ];

    let chen = veterinarians::create_veterinarian(
        &tx,
        "Dr. Emily Chen",
        Some("Surgery"),
        "emily.chen@petclinic.com",
    )?;
    let patel = veterinarians::create_veterinarian(
        &tx,
        "Dr. Raj Patel",
        Some("Dermatology"),
        "raj.patel@petclinic.com",
    )?;

    // One appointment per pet, alternating veterinarians, spread over the
    // coming week.
    let notes = [
        "Annual checkup",
        "Vaccination booster",
        "Limping on front left paw",
        "Water quality consultation",
        "Dental cleaning",
        "Feather plucking",
    ];
    let base_date = Utc::now();
    let mut seeded_appointments = Vec::with_capacity(seeded_pets.len());
    for (i, pet) in seeded_pets.iter().enumerate() {
        let vet_id = if i % 2 == 0 { chen.id } else { patel.id };
        let appointment = appointments::create_appointment(
            &tx,
            pet.id,
            vet_id,
            Some(base_date + Duration::days(i as i64 + 1)),
            Some(notes[i]),
            Some(AppointmentStatus::Scheduled),
        )?;
        seeded_appointments.push(appointment);
    }

    tx.commit()
        .map_err(|e| petclinic_common::Error::database(e.to_string()))?;

    let summary = SeedSummary {
        owners: 3,
        pets: seeded_pets.len(),
        veterinarians: 2,
        appointments: seeded_appointments.len(),
    };

    tracing::info!(
        "Seeded {} owners, {} pets, {} veterinarians, {} appointments",
        summary.owners,
        summary.pets,
        summary.veterinarians,
        summary.appointments
    );

    Ok(summary)
}
