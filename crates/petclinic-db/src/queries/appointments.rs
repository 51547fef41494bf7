//! Appointment database queries.

use chrono::{DateTime, Utc};
use petclinic_common::{AppointmentId, AppointmentStatus, Error, PetId, Result, VetId};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::Appointment;

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: AppointmentId::from(Uuid::parse_str(&row.get::<_, String>(0)?).unwrap()),
        pet_id: PetId::from(Uuid::parse_str(&row.get::<_, String>(1)?).unwrap()),
        veterinarian_id: VetId::from(Uuid::parse_str(&row.get::<_, String>(2)?).unwrap()),
        appointment_date: DateTime::parse_from_rfc3339(&row.get::<_, String>(3)?)
            .unwrap()
            .with_timezone(&Utc),
        notes: row.get(4)?,
        status: row.get::<_, String>(5)?.parse().unwrap(),
    })
}

/// Create a new appointment linking one pet and one veterinarian.
///
/// The appointment date defaults to the insertion time and the status to
/// `Scheduled` when not supplied.
///
/// # Returns
///
/// * `Ok(Appointment)` - The created appointment
/// * `Err(Error)` - If either reference does not exist or a database error
///   occurs
pub fn create_appointment(
    conn: &Connection,
    pet_id: PetId,
    veterinarian_id: VetId,
    appointment_date: Option<DateTime<Utc>>,
    notes: Option<&str>,
    status: Option<AppointmentStatus>,
) -> Result<Appointment> {
    let id = AppointmentId::new();
    let appointment_date = appointment_date.unwrap_or_else(Utc::now);
    let status = status.unwrap_or_default();

    conn.execute(
        "INSERT INTO appointments (id, pet_id, veterinarian_id, appointment_date, notes, status)
         VALUES (:id, :pet_id, :veterinarian_id, :appointment_date, :notes, :status)",
        rusqlite::named_params! {
            ":id": id.to_string(),
            ":pet_id": pet_id.to_string(),
            ":veterinarian_id": veterinarian_id.to_string(),
            ":appointment_date": appointment_date.to_rfc3339(),
            ":notes": notes,
            ":status": status.to_string(),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("FOREIGN KEY constraint failed") {
            Error::InvalidInput(format!(
                "Appointment references missing pet '{}' or veterinarian '{}'",
                pet_id, veterinarian_id
            ))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(Appointment {
        id,
        pet_id,
        veterinarian_id,
        appointment_date,
        notes: notes.map(str::to_string),
        status,
    })
}

/// Get an appointment by ID.
pub fn get_appointment(conn: &Connection, id: AppointmentId) -> Result<Option<Appointment>> {
    let result = conn.query_row(
        "SELECT id, pet_id, veterinarian_id, appointment_date, notes, status
         FROM appointments WHERE id = :id",
        rusqlite::named_params! { ":id": id.to_string() },
        map_row,
    );

    match result {
        Ok(appointment) => Ok(Some(appointment)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all appointments, ordered by date.
pub fn list_appointments(conn: &Connection) -> Result<Vec<Appointment>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, pet_id, veterinarian_id, appointment_date, notes, status
             FROM appointments ORDER BY appointment_date",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let appointments = stmt
        .query_map([], map_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(appointments)
}

/// Count all appointments.
pub fn count_appointments(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM appointments", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;
    use crate::queries::owners::create_owner;
    use crate::queries::pets::create_pet;
    use crate::queries::veterinarians::create_veterinarian;

    fn fixture(conn: &Connection) -> (PetId, VetId) {
        let owner = create_owner(conn, "Alice Johnson", "555-0101", "alice@example.com").unwrap();
        let pet = create_pet(conn, "Buddy", "Dog", None, Some(3), owner.id).unwrap();
        let vet = create_veterinarian(conn, "Dr. Emily Chen", None, "e.chen@clinic.com").unwrap();
        (pet.id, vet.id)
    }

    #[test]
    fn test_create_appointment_defaults() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let (pet_id, vet_id) = fixture(&conn);

        let appointment = create_appointment(&conn, pet_id, vet_id, None, None, None).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert!(appointment.notes.is_none());

        let found = get_appointment(&conn, appointment.id).unwrap().unwrap();
        assert_eq!(found, appointment);
    }

    #[test]
    fn test_create_appointment_with_fields() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let (pet_id, vet_id) = fixture(&conn);

        let date = Utc::now();
        let appointment = create_appointment(
            &conn,
            pet_id,
            vet_id,
            Some(date),
            Some("Annual checkup"),
            Some(AppointmentStatus::Completed),
        )
        .unwrap();

        assert_eq!(appointment.appointment_date, date);
        assert_eq!(appointment.notes.as_deref(), Some("Annual checkup"));
        assert_eq!(appointment.status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_create_appointment_missing_pet() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let (_, vet_id) = fixture(&conn);

        let result = create_appointment(&conn, PetId::new(), vet_id, None, None, None);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_create_appointment_missing_vet() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let (pet_id, _) = fixture(&conn);

        let result = create_appointment(&conn, pet_id, VetId::new(), None, None, None);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_list_appointments() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let (pet_id, vet_id) = fixture(&conn);

        create_appointment(&conn, pet_id, vet_id, None, Some("Vaccination"), None).unwrap();
        create_appointment(&conn, pet_id, vet_id, None, Some("Follow-up"), None).unwrap();

        let appointments = list_appointments(&conn).unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(count_appointments(&conn).unwrap(), 2);
    }
}
