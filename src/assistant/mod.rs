//! Aliza — rule-based medical query assistant.
//!
//! Maps free-text questions onto two intents (medicine lookup by
//! condition, doctor lookup by specialty) through three stages:
//! - `intent`: ordered pattern templates classify the query and capture
//!   a free-text subject plus optional allergy mentions.
//! - `vocabulary`: synonym tables canonicalize the subject ("high bp" →
//!   "hypertension", "heart" → "cardiology").
//! - `responder`: looks records up through a [`store::RecordStore`],
//!   applies allergy filtering or the doctor cap, and composes a reply
//!   with a message, payload, type tag, and follow-up prompt.
//!
//! Classification and canonicalization never fail; a query matching
//! neither pattern family gets the fallback reply. Store errors are the
//! only error path and propagate unchanged.

pub mod intent;
pub mod responder;
pub mod store;
pub mod types;
pub mod vocabulary;

pub use intent::classify;
pub use responder::Aliza;
pub use store::{RecordStore, SqliteStore};
pub use types::{
    AssistantError, DoctorSummary, Intent, MedicineSummary, Relevance, Reply, ReplyData,
    ReplyKind,
};
pub use vocabulary::Vocabulary;
