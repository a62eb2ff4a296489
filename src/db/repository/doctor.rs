use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::Doctor;

fn map_doctor(row: &Row) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        username: row.get(0)?,
        full_name: row.get(1)?,
        specialization: row.get(2)?,
        email: row.get(3)?,
        mobile_number: row.get(4)?,
        hospital_name: row.get(5)?,
    })
}

pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (username, full_name, specialization, email, mobile_number, hospital_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            doctor.username,
            doctor.full_name,
            doctor.specialization,
            doctor.email,
            doctor.mobile_number,
            doctor.hospital_name,
        ],
    )?;
    Ok(())
}

/// Exact-match filter on the specialization field, stable username order.
pub fn list_doctors_by_specialization(
    conn: &Connection,
    specialization: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT username, full_name, specialization, email, mobile_number, hospital_name
         FROM doctors
         WHERE specialization = ?1
         ORDER BY username
         LIMIT ?2 OFFSET ?3",
    )?;

    let rows = stmt.query_map(params![specialization, limit, offset], map_doctor)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_doctors(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
    Ok(count)
}
