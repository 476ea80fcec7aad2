//! Learning-trail prompt construction and response parsing.
//!
//! A trail is a short, personalized activity plan for one student on one
//! topic. The completion API is asked to answer with a JSON object shaped
//! like [`TrailPlan`]; [`parse_trail`] tolerates the usual deviations
//! (code fences, prose around the object, plain text).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Maximum length of a trail topic.
pub const MAX_TRAIL_TOPIC_LEN: usize = 200;

/// Answer-map entries included in a prompt.
const MAX_PROMPT_ANSWERS: usize = 20;

/// What the trail generator knows about a student.
#[derive(Debug, Clone, Default)]
pub struct StudentProfile {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub standard: Option<i16>,
    pub board: Option<String>,
    /// Latest assessment answers, if any.
    pub answers: Option<serde_json::Value>,
}

/// Input for generating one trail.
#[derive(Debug, Clone, Deserialize)]
pub struct TrailRequest {
    pub topic: String,
    pub subject: Option<String>,
}

pub fn validate_trail_request(req: &TrailRequest) -> Result<(), CoreError> {
    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(CoreError::Validation("Trail topic is required".into()));
    }
    if topic.chars().count() > MAX_TRAIL_TOPIC_LEN {
        return Err(CoreError::Validation(format!(
            "Trail topic too long (max {MAX_TRAIL_TOPIC_LEN} chars)"
        )));
    }
    Ok(())
}

/// The system and user messages sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailPrompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailActivity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub minutes: Option<u32>,
}

/// Accepts a number or numeric string, rounded to whole minutes. Anything
/// else (negative, non-numeric, null) reads as `None`.
fn lenient_minutes<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let minutes = match serde_json::Value::deserialize(d)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(minutes
        .filter(|m| m.is_finite() && *m >= 0.0 && *m <= f64::from(u32::MAX))
        .map(|m| m.round() as u32))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub activities: Vec<TrailActivity>,
}

const SYSTEM_PROMPT: &str = "You design short, age-appropriate learning trails for school \
students. Reply with a single JSON object: {\"title\": string, \"summary\": string, \
\"activities\": [{\"title\": string, \"description\": string, \"minutes\": number}]}.";

/// Build the prompt for `profile` and `req`.
pub fn build_prompt(profile: &StudentProfile, req: &TrailRequest) -> TrailPrompt {
    let mut lines = vec![format!("Student: {}", profile.name.trim())];
    if let Some(age) = profile.age {
        lines.push(format!("Age: {age}"));
    }
    if let Some(gender) = profile.gender.as_deref() {
        lines.push(format!("Gender: {gender}"));
    }
    match (profile.standard, profile.board.as_deref()) {
        (Some(std), Some(board)) => lines.push(format!("Class: {std} ({})", board.to_uppercase())),
        (Some(std), None) => lines.push(format!("Class: {std}")),
        _ => {}
    }
    if let Some(subject) = req.subject.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Subject: {}", subject.trim()));
    }
    lines.push(format!("Topic: {}", req.topic.trim()));

    if let Some(obj) = profile.answers.as_ref().and_then(|a| a.as_object()) {
        if !obj.is_empty() {
            lines.push("Recent assessment answers:".to_string());
            for (key, value) in obj.iter().take(MAX_PROMPT_ANSWERS) {
                let rendered = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                lines.push(format!("- {key}: {rendered}"));
            }
        }
    }

    TrailPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: lines.join("\n"),
    }
}

/// Parse a completion into a [`TrailPlan`].
///
/// The outermost `{...}` in `raw` is tried as JSON first. Text that holds
/// no usable object becomes a plan whose summary is the text itself. An
/// empty title falls back to `topic`.
pub fn parse_trail(raw: &str, topic: &str) -> TrailPlan {
    let parsed = extract_object(raw).and_then(|json| serde_json::from_str::<TrailPlan>(json).ok());

    let mut plan = parsed.unwrap_or_else(|| TrailPlan {
        title: String::new(),
        summary: strip_fences(raw).trim().to_string(),
        activities: Vec::new(),
    });
    if plan.title.trim().is_empty() {
        plan.title = topic.trim().to_string();
    }
    plan.activities
        .retain(|a| !a.title.trim().is_empty() || !a.description.trim().is_empty());
    plan
}

fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn strip_fences(raw: &str) -> String {
    raw.lines()
        .filter(|l| !l.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}
