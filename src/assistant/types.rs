use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::{Doctor, Medicine};

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// The classified purpose of a free-text query.
/// Carries the raw captured subject exactly as matched; canonicalization
/// happens later in the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MedicineRecommendation {
        condition: String,
        allergies: Vec<String>,
    },
    FindDoctors {
        specialty: String,
    },
    Unknown,
}

// ---------------------------------------------------------------------------
// ReplyKind
// ---------------------------------------------------------------------------

/// Tag discriminating the reply payload, serialized as the `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    NoResults,
    MedicineList,
    DoctorList,
    Fallback,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoResults => "no_results",
            Self::MedicineList => "medicine_list",
            Self::DoctorList => "doctor_list",
            Self::Fallback => "fallback",
        }
    }
}

// ---------------------------------------------------------------------------
// Result projections
// ---------------------------------------------------------------------------

/// How strongly a medicine matched the asked-about condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// The description mentions the canonical condition.
    High,
    /// Matched by name search only.
    Medium,
}

/// Medicine record as presented to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub expiry_date: NaiveDate,
    pub seller: String,
    pub relevance: Relevance,
}

impl MedicineSummary {
    pub fn from_record(med: &Medicine, condition: &str) -> Self {
        let relevance = if med
            .description
            .to_lowercase()
            .contains(&condition.to_lowercase())
        {
            Relevance::High
        } else {
            Relevance::Medium
        };

        Self {
            id: med.id,
            name: med.name.clone(),
            description: med.description.clone(),
            price: med.price,
            expiry_date: med.expiry_date,
            seller: med.seller_username.clone(),
            relevance,
        }
    }
}

/// Doctor record as presented to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub username: String,
    pub full_name: String,
    pub specialization: String,
    pub email: String,
    pub mobile_number: String,
    pub hospital_name: String,
}

impl From<&Doctor> for DoctorSummary {
    fn from(doctor: &Doctor) -> Self {
        Self {
            username: doctor.username.clone(),
            full_name: doctor.full_name.clone(),
            specialization: doctor.specialization.clone(),
            email: doctor.email.clone(),
            mobile_number: doctor.mobile_number.clone(),
            hospital_name: doctor.hospital_name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// Ordered result records attached to a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyData {
    Medicines(Vec<MedicineSummary>),
    Doctors(Vec<DoctorSummary>),
}

impl ReplyData {
    pub fn len(&self) -> usize {
        match self {
            Self::Medicines(records) => records.len(),
            Self::Doctors(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The structured response returned to the caller.
/// `data` is present exactly when `kind` is MedicineList or DoctorList;
/// an empty list after allergy filtering is still a MedicineList.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup: Option<String>,
}

impl Reply {
    /// Number of attached result records (0 when there is no payload).
    pub fn result_count(&self) -> usize {
        self.data.as_ref().map(ReplyData::len).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// AssistantError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_medicine(description: &str) -> Medicine {
        Medicine {
            id: Uuid::new_v4(),
            name: "Paracetamol".into(),
            description: description.into(),
            price: 25.0,
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            seller_username: "medplus".into(),
        }
    }

    #[test]
    fn reply_kind_tags() {
        assert_eq!(ReplyKind::NoResults.as_str(), "no_results");
        assert_eq!(ReplyKind::MedicineList.as_str(), "medicine_list");
        assert_eq!(ReplyKind::DoctorList.as_str(), "doctor_list");
        assert_eq!(ReplyKind::Fallback.as_str(), "fallback");
    }

    #[test]
    fn summary_relevance_high_when_description_mentions_condition() {
        let med = make_medicine("Relief for headache and fever");
        let summary = MedicineSummary::from_record(&med, "headache");
        assert_eq!(summary.relevance, Relevance::High);
    }

    #[test]
    fn summary_relevance_case_insensitive() {
        let med = make_medicine("Relief for Headache");
        let summary = MedicineSummary::from_record(&med, "HEADACHE");
        assert_eq!(summary.relevance, Relevance::High);
    }

    #[test]
    fn summary_relevance_medium_otherwise() {
        let med = make_medicine("General pain relief");
        let summary = MedicineSummary::from_record(&med, "headache");
        assert_eq!(summary.relevance, Relevance::Medium);
    }

    #[test]
    fn reply_serializes_type_tag_and_omits_absent_fields() {
        let reply = Reply {
            message: "no luck".into(),
            data: None,
            kind: ReplyKind::NoResults,
            followup: None,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "no_results");
        assert!(json.get("data").is_none());
        assert!(json.get("followup").is_none());
    }

    #[test]
    fn reply_serializes_medicine_payload_as_array() {
        let med = make_medicine("For headache");
        let reply = Reply {
            message: "here".into(),
            data: Some(ReplyData::Medicines(vec![MedicineSummary::from_record(
                &med, "headache",
            )])),
            kind: ReplyKind::MedicineList,
            followup: Some("anything else?".into()),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert!(json["data"].is_array());
        assert_eq!(json["data"][0]["relevance"], "high");
        assert_eq!(json["type"], "medicine_list");
        assert_eq!(json["followup"], "anything else?");
    }

    #[test]
    fn result_count_counts_payload() {
        let reply = Reply {
            message: "m".into(),
            data: Some(ReplyData::Doctors(vec![])),
            kind: ReplyKind::DoctorList,
            followup: None,
        };
        assert_eq!(reply.result_count(), 0);
    }
}
