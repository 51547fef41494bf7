//! Veterinarian database queries.

use chrono::{DateTime, Utc};
use petclinic_common::{Error, Result, VetId};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::Veterinarian;

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Veterinarian> {
    Ok(Veterinarian {
        id: VetId::from(Uuid::parse_str(&row.get::<_, String>(0)?).unwrap()),
        name: row.get(1)?,
        specialization: row.get(2)?,
        email: row.get(3)?,
        created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(4)?)
            .unwrap()
            .with_timezone(&Utc),
    })
}

/// Create a new veterinarian.
///
/// # Returns
///
/// * `Ok(Veterinarian)` - The created veterinarian
/// * `Err(Error)` - If the email already exists or a database error occurs
pub fn create_veterinarian(
    conn: &Connection,
    name: &str,
    specialization: Option<&str>,
    email: &str,
) -> Result<Veterinarian> {
    let id = VetId::new();
    let created_at = Utc::now();

    conn.execute(
        "INSERT INTO veterinarians (id, name, specialization, email, created_at)
         VALUES (:id, :name, :specialization, :email, :created_at)",
        rusqlite::named_params! {
            ":id": id.to_string(),
            ":name": name,
            ":specialization": specialization,
            ":email": email,
            ":created_at": created_at.to_rfc3339(),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::InvalidInput(format!("Veterinarian email '{}' already exists", email))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(Veterinarian {
        id,
        name: name.to_string(),
        specialization: specialization.map(str::to_string),
        email: email.to_string(),
        created_at,
    })
}

/// Get a veterinarian by ID.
pub fn get_veterinarian(conn: &Connection, id: VetId) -> Result<Option<Veterinarian>> {
    let result = conn.query_row(
        "SELECT id, name, specialization, email, created_at
         FROM veterinarians WHERE id = :id",
        rusqlite::named_params! { ":id": id.to_string() },
        map_row,
    );

    match result {
        Ok(vet) => Ok(Some(vet)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all veterinarians, ordered by name.
pub fn list_veterinarians(conn: &Connection) -> Result<Vec<Veterinarian>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, specialization, email, created_at
             FROM veterinarians ORDER BY name",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let vets = stmt
        .query_map([], map_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(vets)
}

/// Count all veterinarians.
pub fn count_veterinarians(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM veterinarians", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn test_create_veterinarian() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let vet = create_veterinarian(&conn, "Dr. Emily Chen", Some("Surgery"), "e.chen@clinic.com")
            .unwrap();
        assert_eq!(vet.name, "Dr. Emily Chen");
        assert_eq!(vet.specialization.as_deref(), Some("Surgery"));
    }

    #[test]
    fn test_create_duplicate_email() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_veterinarian(&conn, "Dr. Emily Chen", None, "e.chen@clinic.com").unwrap();
        let result = create_veterinarian(&conn, "Dr. Emil Chen", None, "e.chen@clinic.com");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_get_veterinarian() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let created =
            create_veterinarian(&conn, "Dr. Raj Patel", None, "r.patel@clinic.com").unwrap();
        let found = get_veterinarian(&conn, created.id).unwrap().unwrap();

        assert_eq!(found.id, created.id);
        assert!(found.specialization.is_none());
    }

    #[test]
    fn test_get_veterinarian_not_found() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let result = get_veterinarian(&conn, VetId::new()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_list_veterinarians() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        create_veterinarian(&conn, "Dr. Raj Patel", Some("Dermatology"), "r.patel@clinic.com")
            .unwrap();
        create_veterinarian(&conn, "Dr. Emily Chen", Some("Surgery"), "e.chen@clinic.com").unwrap();

        let vets = list_veterinarians(&conn).unwrap();
        assert_eq!(vets.len(), 2);
        assert_eq!(vets[0].name, "Dr. Emily Chen");
        assert_eq!(count_veterinarians(&conn).unwrap(), 2);
    }
}
