use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Medicine;

fn map_medicine(row: &Row) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
        expiry_date: NaiveDate::parse_from_str(&row.get::<_, String>(5)?, "%Y-%m-%d")
            .unwrap_or_default(),
        seller_username: row.get(6)?,
    })
}

pub fn insert_medicine(conn: &Connection, med: &Medicine) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medicines (id, name, description, price, quantity, expiry_date, seller_username)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            med.id.to_string(),
            med.name,
            med.description,
            med.price,
            med.quantity,
            med.expiry_date.to_string(),
            med.seller_username,
        ],
    )?;
    Ok(())
}

/// Case-insensitive substring search over medicine name and description,
/// cheapest first. The price ordering is part of the contract callers rely on.
pub fn search_medicines_by_name(
    conn: &Connection,
    term: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<Medicine>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, price, quantity, expiry_date, seller_username
         FROM medicines
         WHERE name LIKE '%' || ?1 || '%' OR description LIKE '%' || ?1 || '%'
         ORDER BY price ASC
         LIMIT ?2 OFFSET ?3",
    )?;

    let rows = stmt.query_map(params![term, limit, offset], map_medicine)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_medicines(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM medicines", [], |row| row.get(0))?;
    Ok(count)
}
