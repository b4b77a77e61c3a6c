//! Mentor-routing wire contracts
//!
//! Request and response records for the mentor-assist endpoint. Everything
//! here is per-request; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Caller-supplied summary of what is known about the founder so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderProfile {
    /// Industry the founder operates in
    pub industry: Option<String>,
    /// Company stage (e.g. pre-seed, seed, Series A)
    pub stage: Option<String>,
    /// Key challenges the founder has surfaced
    #[serde(default)]
    pub key_challenges: Vec<String>,
}

/// Mentor-assist request
///
/// The caller maintains all conversational state: the full memory context
/// must be supplied on every call.
#[derive(Debug, Clone, Deserialize)]
pub struct MentorRequest {
    /// The founder's message
    pub user_message: String,
    /// Profile summary, if one has been built up
    pub founder_profile: Option<FounderProfile>,
    /// Currently active mentor track, if one was already selected
    pub active_mentor_track: Option<String>,
    /// Free-text summary carried across calls for continuity
    #[serde(default)]
    pub memory_context: String,
}

/// Mentor-assist response
///
/// Deserialized strictly from the routing model's JSON output; a payload
/// missing any required field is rejected rather than repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorResponse {
    /// Track the message was classified into
    pub mentor_track: String,
    /// Whether the track changed relative to the active one
    pub switched_track: bool,
    /// The mentor's reply
    pub reply: String,
    /// At most one clarifying question; absent when none is needed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarifying_question: Option<String>,
    /// 2-5 immediately actionable next steps
    pub next_actions: Vec<String>,
    /// Compact memory summary for the caller's next request
    pub memory_update: String,
}
