//! Pet database queries.

use chrono::{DateTime, Utc};
use petclinic_common::{Error, OwnerId, PetId, Result};
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::Pet;

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: PetId::from(Uuid::parse_str(&row.get::<_, String>(0)?).unwrap()),
        name: row.get(1)?,
        species: row.get(2)?,
        breed: row.get(3)?,
        age: row.get(4)?,
        owner_id: OwnerId::from(Uuid::parse_str(&row.get::<_, String>(5)?).unwrap()),
        created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(6)?)
            .unwrap()
            .with_timezone(&Utc),
    })
}

/// Create a new pet wired to an existing owner.
///
/// # Returns
///
/// * `Ok(Pet)` - The created pet
/// * `Err(Error)` - If the owner does not exist or a database error occurs
pub fn create_pet(
    conn: &Connection,
    name: &str,
    species: &str,
    breed: Option<&str>,
    age: Option<i32>,
    owner_id: OwnerId,
) -> Result<Pet> {
    let id = PetId::new();
    let created_at = Utc::now();

    conn.execute(
        "INSERT INTO pets (id, name, species, breed, age, owner_id, created_at)
         VALUES (:id, :name, :species, :breed, :age, :owner_id, :created_at)",
        rusqlite::named_params! {
            ":id": id.to_string(),
            ":name": name,
            ":species": species,
            ":breed": breed,
            ":age": age,
            ":owner_id": owner_id.to_string(),
            ":created_at": created_at.to_rfc3339(),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("FOREIGN KEY constraint failed") {
            Error::InvalidInput(format!("Owner '{}' does not exist", owner_id))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(Pet {
        id,
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.map(str::to_string),
        age,
        owner_id,
        created_at,
    })
}

/// Get a pet by ID.
pub fn get_pet(conn: &Connection, id: PetId) -> Result<Option<Pet>> {
    let result = conn.query_row(
        "SELECT id, name, species, breed, age, owner_id, created_at
         FROM pets WHERE id = :id",
        rusqlite::named_params! { ":id": id.to_string() },
        map_row,
    );

    match result {
        Ok(pet) => Ok(Some(pet)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all pets, ordered by name.
pub fn list_pets(conn: &Connection) -> Result<Vec<Pet>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, species, breed, age, owner_id, created_at
             FROM pets ORDER BY name",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let pets = stmt
        .query_map([], map_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(pets)
}

/// List all pets belonging to one owner, ordered by name.
pub fn list_pets_by_owner(conn: &Connection, owner_id: OwnerId) -> Result<Vec<Pet>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, species, breed, age, owner_id, created_at
             FROM pets WHERE owner_id = :owner_id ORDER BY name",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let pets = stmt
        .query_map(
            rusqlite::named_params! { ":owner_id": owner_id.to_string() },
            map_row,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(pets)
}

/// Count all pets.
pub fn count_pets(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
