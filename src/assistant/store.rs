use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::db::repository::{list_doctors_by_specialization, search_medicines_by_name};
use crate::db::sqlite::{open_database, open_memory_database};
use crate::db::DatabaseError;
use crate::models::{Doctor, Medicine};

/// Read-only record lookups the responder consumes. The responder never
/// writes through this seam.
pub trait RecordStore: Send + Sync {
    /// Substring/keyword search over medicine name and description.
    /// Results arrive cheapest first; the ordering is the store's contract.
    fn search_medicines(
        &self,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Medicine>, DatabaseError>;

    /// Exact-match filter on the doctor specialization field.
    fn doctors_by_specialty(
        &self,
        specialty: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Doctor>, DatabaseError>;
}

/// SQLite-backed store. The connection sits behind a mutex since
/// rusqlite connections are not shareable across threads directly.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (creating and migrating if needed) a database file.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(open_database(path)?))
    }

    /// In-memory store, mainly for tests and demos.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(open_memory_database()?))
    }

    /// Run a closure against the guarded connection.
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockFailed)?;
        f(&conn)
    }
}

impl RecordStore for SqliteStore {
    fn search_medicines(
        &self,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Medicine>, DatabaseError> {
        self.with_conn(|conn| search_medicines_by_name(conn, term, limit, offset))
    }

    fn doctors_by_specialty(
        &self,
        specialty: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Doctor>, DatabaseError> {
        self.with_conn(|conn| list_doctors_by_specialization(conn, specialty, limit, offset))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::assistant::responder::Aliza;
    use crate::assistant::types::{ReplyData, ReplyKind};
    use crate::db::repository::{insert_doctor, insert_medicine};

    fn seeded_store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .with_conn(|conn| {
                insert_medicine(
                    conn,
                    &Medicine {
                        id: Uuid::new_v4(),
                        name: "Paracetamol 500".into(),
                        description: "Analgesic for headache and fever".into(),
                        price: 25.0,
                        quantity: 50,
                        expiry_date: NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
                        seller_username: "medplus".into(),
                    },
                )?;
                insert_medicine(
                    conn,
                    &Medicine {
                        id: Uuid::new_v4(),
                        name: "Migrelief".into(),
                        description: "For migraine and headache, contains aspirin".into(),
                        price: 90.0,
                        quantity: 12,
                        expiry_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                        seller_username: "wellcare".into(),
                    },
                )?;
                insert_doctor(
                    conn,
                    &Doctor {
                        username: "asha".into(),
                        full_name: "Dr. Asha Menon".into(),
                        specialization: "cardiology".into(),
                        email: "asha@hospital.example".into(),
                        mobile_number: "5550101".into(),
                        hospital_name: "City General".into(),
                    },
                )
            })
            .unwrap();
        store
    }

    #[test]
    fn sqlite_store_searches_medicines() {
        let store = seeded_store();
        let results = store.search_medicines("headache", 10, 0).unwrap();
        assert_eq!(results.len(), 2);
        // Cheapest first
        assert_eq!(results[0].name, "Paracetamol 500");
    }

    #[test]
    fn sqlite_store_exact_specialty_only() {
        let store = seeded_store();
        assert_eq!(store.doctors_by_specialty("cardiology", 10, 0).unwrap().len(), 1);
        assert!(store.doctors_by_specialty("cardio", 10, 0).unwrap().is_empty());
    }

    /// Full flow over SQLite: "I have a headache" finds the seeded rows.
    #[test]
    fn responder_end_to_end_over_sqlite() {
        let aliza = Aliza::new(seeded_store());

        let reply = aliza.process_query("I have a headache").unwrap();
        assert_eq!(reply.kind, ReplyKind::MedicineList);
        assert_eq!(reply.result_count(), 2);

        let reply = aliza
            .process_query("I have a headache, allergic to aspirin")
            .unwrap();
        assert_eq!(reply.kind, ReplyKind::MedicineList);
        match reply.data.unwrap() {
            ReplyData::Medicines(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "Paracetamol 500");
            }
            other => panic!("expected medicines, got {other:?}"),
        }

        let reply = aliza.process_query("heart specialist").unwrap();
        assert_eq!(reply.kind, ReplyKind::DoctorList);
        assert_eq!(reply.result_count(), 1);
    }
}
