pub mod assistant;
pub mod config;
pub mod db;
pub mod models;

pub use assistant::{Aliza, RecordStore, SqliteStore};
