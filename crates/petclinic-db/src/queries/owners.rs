//! Owner database queries.

use chrono::{DateTime, Utc};
use petclinic_common::{Error, OwnerId, Result};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::Owner;

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Owner> {
    Ok(Owner {
        id: OwnerId::from(Uuid::parse_str(&row.get::<_, String>(0)?).unwrap()),
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(4)?)
            .unwrap()
            .with_timezone(&Utc),
    })
}

/// Create a new owner.
///
/// # Returns
///
/// * `Ok(Owner)` - The created owner
/// * `Err(Error)` - If the email already exists or a database error occurs
pub fn create_owner(conn: &Connection, name: &str, phone: &str, email: &str) -> Result<Owner> {
    let id = OwnerId::new();
    let created_at = Utc::now();

    conn.execute(
        "INSERT INTO owners (id, name, phone, email, created_at)
         VALUES (:id, :name, :phone, :email, :created_at)",
        rusqlite::named_params! {
            ":id": id.to_string(),
            ":name": name,
            ":phone": phone,
            ":email": email,
            ":created_at": created_at.to_rfc3339(),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::InvalidInput(format!("Owner email '{}' already exists", email))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(Owner {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        created_at,
    })
}

/// Get an owner by ID.
///
/// # Returns
///
/// * `Ok(Some(Owner))` - The owner if found
/// * `Ok(None)` - If the owner does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_owner(conn: &Connection, id: OwnerId) -> Result<Option<Owner>> {
    let result = conn.query_row(
        "SELECT id, name, phone, email, created_at FROM owners WHERE id = :id",
        rusqlite::named_params! { ":id": id.to_string() },
        map_row,
    );

    match result {
        Ok(owner) => Ok(Some(owner)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all owners, ordered by name.
pub fn list_owners(conn: &Connection) -> Result<Vec<Owner>> {
    let mut stmt = conn
        .prepare("SELECT id, name, phone, email, created_at FROM owners ORDER BY name")
        .map_err(|e| Error::database(e.to_string()))?;

    let owners = stmt
        .query_map([], map_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(owners)
}

/// Count all owners.
pub fn count_owners(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM owners", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
