//! Routing prompt assembly
//!
//! The routing "logic" of the mentor endpoint lives entirely in this prompt;
//! the service itself only shapes input and validates output.

use super::types::MentorRequest;

/// Fixed instruction prompt sent as the system message on every routing call
pub const ROUTING_PROMPT: &str = r#"
You are the Mentorra Routing Agent. You act as the brain behind a founder's mentorship experience.

You will receive:
- user_message: A single string from the founder
- active_mentor_track: Current mentor track id if already selected
- founder_profile: JSON summary of what we know so far
- memory_context: Previous context of the conversation

Primary goals:
1) Classify the founder's message into exactly ONE mentor track (e.g., "Product", "Sales", "Fundraising", "Leadership", "Growth").
2) Decide whether to switch mentors or stay on the current one. Prefer stability unless the founder's intent clearly changed.
3) Reply as the selected mentor in a concise, supportive, operator style (no fluff).
4) Ask at most ONE clarifying question, only if necessary to proceed.
5) Provide 2-5 next actions the founder can do immediately (this week).
6) Update "memory_update" compactly so the next call stays consistent.

Output must be valid JSON matching this schema:
{
  "mentor_track": "string",
  "switched_track": boolean,
  "reply": "string",
  "clarifying_question": "string or null",
  "next_actions": ["action1", "action2"],
  "memory_update": "string summary of new facts"
}
"#;

/// Render the structured context block sent as the user message
///
/// Omitted fields are replaced by the literal markers the prompt was written
/// against: "None" for the active track, "Unknown" for the profile.
pub fn build_input_context(request: &MentorRequest) -> String {
    let active_track = request.active_mentor_track.as_deref().unwrap_or("None");

    let profile = request
        .founder_profile
        .as_ref()
        .and_then(|p| serde_json::to_string(p).ok())
        .unwrap_or_else(|| "Unknown".to_string());

    format!(
        "INPUT DATA:\n\
         - User Message: \"{}\"\n\
         - Active Mentor Track: {}\n\
         - Founder Profile: {}\n\
         - Memory Context: {}",
        request.user_message, active_track, profile, request.memory_context
    )
}
