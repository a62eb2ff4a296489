use std::time::Instant;

use crate::models::Medicine;

use super::intent::classify;
use super::store::RecordStore;
use super::types::{
    AssistantError, DoctorSummary, Intent, MedicineSummary, Reply, ReplyData, ReplyKind,
};
use super::vocabulary::Vocabulary;

/// Page size for collaborator lookups.
const SEARCH_LIMIT: u32 = 10;
/// Doctor replies are truncated to the first N records.
const DOCTOR_CAP: usize = 5;

/// The query responder. Stateless per query: classify, canonicalize,
/// look up, filter, compose. Store errors propagate to the caller
/// unchanged; there is no retry and no fallback data source.
pub struct Aliza<S: RecordStore> {
    store: S,
    vocabulary: Vocabulary,
}

impl<S: RecordStore> Aliza<S> {
    pub fn new(store: S) -> Self {
        Self::with_vocabulary(store, Vocabulary::builtin())
    }

    pub fn with_vocabulary(store: S, vocabulary: Vocabulary) -> Self {
        Self { store, vocabulary }
    }

    /// Answer a free-text query with a structured reply.
    pub fn process_query(&self, query: &str) -> Result<Reply, AssistantError> {
        let start = Instant::now();

        let reply = match classify(query) {
            Intent::MedicineRecommendation {
                condition,
                allergies,
            } => self.recommend_medicines(&condition, &allergies)?,
            Intent::FindDoctors { specialty } => self.find_doctors(&specialty)?,
            Intent::Unknown => fallback_reply(),
        };

        tracing::info!(
            kind = reply.kind.as_str(),
            results = reply.result_count(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Query processed"
        );

        Ok(reply)
    }

    fn recommend_medicines(
        &self,
        condition: &str,
        allergies: &[String],
    ) -> Result<Reply, AssistantError> {
        let condition = self.vocabulary.canonical_condition(condition);
        let medicines = self.store.search_medicines(&condition, SEARCH_LIMIT, 0)?;

        if medicines.is_empty() {
            return Ok(Reply {
                message: format!(
                    "I couldn't find specific medicines for {condition} in our database. \
                     It would be best to consult a doctor for proper diagnosis and treatment."
                ),
                data: None,
                kind: ReplyKind::NoResults,
                followup: Some(
                    "Would you like me to help you find a doctor who specializes in treating \
                     this condition?"
                        .to_string(),
                ),
            });
        }

        // A list emptied by the allergy filter still goes out as a
        // medicine_list, not no_results.
        let tolerated = filter_by_allergies(medicines, allergies);
        let summaries: Vec<MedicineSummary> = tolerated
            .iter()
            .map(|med| MedicineSummary::from_record(med, &condition))
            .collect();

        Ok(Reply {
            message: format!(
                "Based on your condition ({condition}), here are some recommended medicines:"
            ),
            data: Some(ReplyData::Medicines(summaries)),
            kind: ReplyKind::MedicineList,
            followup: Some(
                "Would you like more information about any of these medicines, or would you \
                 prefer to speak with a doctor?"
                    .to_string(),
            ),
        })
    }

    fn find_doctors(&self, specialty: &str) -> Result<Reply, AssistantError> {
        let specialty = self.vocabulary.canonical_specialty(specialty);
        let mut doctors = self.store.doctors_by_specialty(&specialty, SEARCH_LIMIT, 0)?;

        if doctors.is_empty() {
            return Ok(Reply {
                message: format!(
                    "I couldn't find doctors specializing in {specialty} in our database."
                ),
                data: None,
                kind: ReplyKind::NoResults,
                followup: Some("Would you like to search for a different specialty?".to_string()),
            });
        }

        doctors.truncate(DOCTOR_CAP);

        Ok(Reply {
            message: format!("Here are the top doctors specializing in {specialty}:"),
            data: Some(ReplyData::Doctors(
                doctors.iter().map(DoctorSummary::from).collect(),
            )),
            kind: ReplyKind::DoctorList,
            followup: Some(
                "Would you like to book an appointment with any of these doctors?".to_string(),
            ),
        })
    }
}

fn fallback_reply() -> Reply {
    Reply {
        message: "I'm not sure how to help with that. I can recommend medicines for \
                  conditions or help you find doctors by specialty."
            .to_string(),
        data: None,
        kind: ReplyKind::Fallback,
        followup: Some(
            "Would you like to know what medicines can help with a specific condition, or \
             find a doctor with a specific specialty?"
                .to_string(),
        ),
    }
}

/// Drop every medicine whose description mentions any allergy term
/// (case-insensitive substring). Pure subset of the input, never an error.
fn filter_by_allergies(medicines: Vec<Medicine>, allergies: &[String]) -> Vec<Medicine> {
    if allergies.is_empty() {
        return medicines;
    }

    medicines
        .into_iter()
        .filter(|med| {
            let description = med.description.to_lowercase();
            !allergies
                .iter()
                .any(|allergy| description.contains(&allergy.to_lowercase()))
        })
        .collect()
}
