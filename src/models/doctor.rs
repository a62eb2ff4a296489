use serde::{Deserialize, Serialize};

/// A registered doctor profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub username: String,
    pub full_name: String,
    pub specialization: String,
    pub email: String,
    pub mobile_number: String,
    pub hospital_name: String,
}
