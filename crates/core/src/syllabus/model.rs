//! Syllabus document model.
//!
//! Deserialization is lenient so hand-maintained and scraped files load:
//! `standard` and `chapter_no` may be numbers or numeric strings, and
//! `topics` may be bare strings (legacy format), which are upgraded to full
//! [`Topic`] records with defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Default teaching time for a topic that does not specify one.
pub const DEFAULT_TOPIC_MINUTES: u32 = 40;

/// One board/standard/subject syllabus file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusDocument {
    #[serde(default)]
    pub board: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub standard: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub chapter_no: u32,
    #[serde(default)]
    pub chapter_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient_topics")]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub topic_id: String,
    pub name: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_minutes")]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub assessment: AssessmentFlags,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Which kinds of assessment a topic is used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentFlags {
    #[serde(default)]
    pub formative: bool,
    #[serde(default)]
    pub summative: bool,
    #[serde(default)]
    pub practical: bool,
}

fn default_minutes() -> u32 {
    DEFAULT_TOPIC_MINUTES
}

impl Topic {
    /// A topic with only a name; every other field takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            topic_id: String::new(),
            name: name.into(),
            difficulty: Difficulty::default(),
            estimated_minutes: DEFAULT_TOPIC_MINUTES,
            methods: Vec::new(),
            assessment: AssessmentFlags::default(),
            prerequisites: Vec::new(),
        }
    }
}

impl Chapter {
    /// An empty chapter with the given number and name.
    pub fn new(chapter_no: u32, chapter_name: impl Into<String>) -> Self {
        Self {
            chapter_id: String::new(),
            chapter_no,
            chapter_name: chapter_name.into(),
            domain: None,
            topics: Vec::new(),
        }
    }
}

impl SyllabusDocument {
    /// Parse a syllabus document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text)
            .map_err(|e| CoreError::Validation(format!("Invalid syllabus JSON: {e}")))
    }

    /// Serialize as pretty-printed JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, CoreError> {
        let mut out = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize syllabus: {e}")))?;
        out.push('\n');
        Ok(out)
    }

    /// Total number of topics across all chapters.
    pub fn topic_count(&self) -> usize {
        self.chapters.iter().map(|c| c.topics.len()).sum()
    }

    /// Find a chapter by its id.
    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.chapter_id == chapter_id)
    }
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(i64),
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<StringOrNumber>::deserialize(d)? {
        Some(StringOrNumber::Str(s)) => s,
        Some(StringOrNumber::Num(n)) => n.to_string(),
        None => String::new(),
    })
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match Option::<StringOrNumber>::deserialize(d)? {
        Some(StringOrNumber::Num(n)) => u32::try_from(n).unwrap_or(0),
        Some(StringOrNumber::Str(s)) => s.trim().parse().unwrap_or(0),
        None => 0,
    })
}

fn nullable_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopic {
    Name(String),
    Full(Topic),
}

fn lenient_topics<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Topic>, D::Error> {
    let raw = Option::<Vec<RawTopic>>::deserialize(d)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|t| match t {
            RawTopic::Name(name) => Topic::named(name),
            RawTopic::Full(topic) => topic,
        })
        .collect())
}
