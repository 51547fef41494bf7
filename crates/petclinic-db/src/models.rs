//! Internal Rust models matching the database schema.
//!
//! This module provides strongly-typed Rust structures that map to database
//! tables. All models use types from petclinic-common where appropriate.

use chrono::{DateTime, Utc};
use petclinic_common::{AppointmentId, AppointmentStatus, OwnerId, PetId, VetId};
use serde::{Deserialize, Serialize};

/// A pet's registered guardian contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// An animal under clinic care, belonging to one owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

/// Clinic staff member providing care.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Veterinarian {
    pub id: VetId,
    pub name: String,
    pub specialization: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A join record linking one pet visit to one veterinarian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub pet_id: PetId,
    pub veterinarian_id: VetId,
    pub appointment_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_serialization() {
        let owner = Owner {
            id: OwnerId::new(),
            name: "Alice Johnson".to_string(),
            phone: "555-0101".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&owner).unwrap();
        let back: Owner = serde_json::from_str(&json).unwrap();
        assert_eq!(owner, back);
    }

    #[test]
    fn test_appointment_default_status() {
        let appointment = Appointment {
            id: AppointmentId::new(),
            pet_id: PetId::new(),
            veterinarian_id: VetId::new(),
            appointment_date: Utc::now(),
            notes: None,
            status: AppointmentStatus::default(),
        };
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }
}
