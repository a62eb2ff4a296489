use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use aliza::assistant::{Aliza, SqliteStore};
use aliza::config;
use aliza::db::repository::{count_doctors, count_medicines, insert_doctor, insert_medicine};
use aliza::models::{Doctor, Medicine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Aliza starting v{}", config::APP_VERSION);

    if let Err(e) = run() {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(config::app_data_dir())?;
    let store = SqliteStore::open(&config::database_path())?;
    seed_if_empty(&store)?;

    let aliza = Aliza::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Ask about medicines or doctors (empty line to quit).");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let reply = aliza.process_query(query)?;
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }

    Ok(())
}

/// Seed a handful of rows the first time the database is created, so the
/// REPL has something to answer with.
fn seed_if_empty(store: &SqliteStore) -> Result<(), aliza::db::DatabaseError> {
    store.with_conn(|conn| {
        if count_medicines(conn)? > 0 || count_doctors(conn)? > 0 {
            return Ok(());
        }

        tracing::info!("Empty database, seeding sample records");
        for med in sample_medicines() {
            insert_medicine(conn, &med)?;
        }
        for doctor in sample_doctors() {
            insert_doctor(conn, &doctor)?;
        }
        Ok(())
    })
}

fn sample_medicines() -> Vec<Medicine> {
    let expiry = NaiveDate::from_ymd_opt(2027, 6, 30).unwrap_or_default();
    [
        ("Paracetamol 500", "Analgesic and antipyretic for headache and fever", 25.0),
        ("Ibuprofen 400", "Anti-inflammatory for joint pain and back pain", 55.0),
        ("Cetirizine 10", "Antihistamine for allergy and skin rash", 40.0),
        ("Amoxicillin 250", "Penicillin antibiotic for bacterial infection", 120.0),
        ("Coldex Syrup", "Decongestant syrup for common cold and cough", 85.0),
        ("Disprin", "Aspirin tablet for headache", 15.0),
    ]
    .into_iter()
    .map(|(name, description, price)| Medicine {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        quantity: 40,
        expiry_date: expiry,
        seller_username: "medplus".to_string(),
    })
    .collect()
}

fn sample_doctors() -> Vec<Doctor> {
    [
        ("asha", "Dr. Asha Menon", "cardiology", "City General"),
        ("rohit", "Dr. Rohit Shah", "cardiology", "Lakeside Heart Institute"),
        ("meera", "Dr. Meera Pillai", "dermatology", "City General"),
        ("vikram", "Dr. Vikram Rao", "neurology", "Northside Clinic"),
        ("sara", "Dr. Sara Thomas", "pediatrics", "Children's Hospital"),
    ]
    .into_iter()
    .map(|(username, full_name, specialization, hospital)| Doctor {
        username: username.to_string(),
        full_name: full_name.to_string(),
        specialization: specialization.to_string(),
        email: format!("{username}@hospital.example"),
        mobile_number: "5550100".to_string(),
        hospital_name: hospital.to_string(),
    })
    .collect()
}
