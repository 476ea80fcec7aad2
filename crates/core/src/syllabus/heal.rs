//! Repair passes for malformed syllabus chapter data.
//!
//! Scraped chapter lists often break a title across entries
//! (`"Knowing Our Numbers (Large"`, `"Numbers)"`) or glue two titles into
//! one (`"Fractions 8. Decimals"`). [`heal`] runs, in order:
//!
//! 1. name normalization (whitespace collapse),
//! 2. merge: an open title absorbs the following entries up to the one
//!    that closes it, if that one is at most [`MERGE_LOOKAHEAD`] entries
//!    away; fragments that start with an unmatched `)` or have no name are
//!    always folded into the previous chapter,
//! 3. split: embedded `" N. "` markers at parenthesis depth 0 start a new
//!    chapter; the first part keeps the topics,
//! 4. drop: nameless chapters without topics,
//! 5. [`reindex`]: sequential numbers and ids, prerequisites remapped.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::syllabus::model::{Chapter, SyllabusDocument};

/// `" 8. "` style chapter marker embedded in a title.
static EMBEDDED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d{1,2})\.\s+").expect("valid marker regex"));

/// Words after which a number is part of the title, not a new chapter.
const NUMBERING_WORDS: &[&str] = &["chapter", "unit", "part", "lesson", "section"];

/// One change made (or problem left) by a repair pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HealAction {
    Merged { into: String, fragment: String },
    Split { original: String, parts: Vec<String> },
    DroppedEmpty { chapter_no: u32 },
    Renumbered { from: u32, to: u32 },
    IdChanged { from: String, to: String },
    PrerequisiteDropped { topic_id: String, prerequisite: String },
    Unresolved { chapter_name: String },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HealReport {
    pub chapters_before: usize,
    pub chapters_after: usize,
    pub actions: Vec<HealAction>,
}

impl HealReport {
    /// Whether the structure changed (merge, split or drop).
    pub fn restructured(&self) -> bool {
        self.actions.iter().any(|a| {
            matches!(
                a,
                HealAction::Merged { .. } | HealAction::Split { .. } | HealAction::DroppedEmpty { .. }
            )
        })
    }

    /// Names that are still unbalanced after healing.
    pub fn unresolved(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                HealAction::Unresolved { chapter_name } => Some(chapter_name.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Parenthesis helpers
// ---------------------------------------------------------------------------

/// `(` count minus `)` count.
pub fn paren_balance(name: &str) -> i32 {
    name.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

/// True if scanning left to right the depth ever drops below zero.
pub fn has_leading_unmatched_closer(name: &str) -> bool {
    let mut depth = 0i32;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Whether a title still needs repair.
pub fn is_unbalanced(name: &str) -> bool {
    paren_balance(name) != 0 || has_leading_unmatched_closer(name)
}

fn depth_at(name: &str, byte_pos: usize) -> i32 {
    paren_balance(&name[..byte_pos])
}

/// Collapse runs of whitespace and trim.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a title at embedded chapter markers that sit at depth 0.
///
/// Returns a single element when there is nothing to split.
pub fn split_title(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut part_start = 0;

    for m in EMBEDDED_MARKER.find_iter(name) {
        if depth_at(name, m.start()) > 0 {
            continue;
        }
        let before = name[part_start..m.start()].trim();
        let last_word = before
            .rsplit(' ')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if before.is_empty() || NUMBERING_WORDS.contains(&last_word.as_str()) {
            continue;
        }
        parts.push(before.to_string());
        part_start = m.end();
    }

    let rest = name[part_start..].trim();
    if !rest.is_empty() || parts.is_empty() {
        parts.push(rest.to_string());
    }
    parts
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

fn absorb(target: &mut Chapter, fragment: Chapter) {
    if !fragment.chapter_name.is_empty() {
        if target.chapter_name.is_empty() {
            target.chapter_name = fragment.chapter_name;
        } else {
            target.chapter_name = format!("{} {}", target.chapter_name, fragment.chapter_name);
        }
    }
    if target.domain.as_deref().map_or(true, str::is_empty) {
        target.domain = fragment.domain;
    }
    target.topics.extend(fragment.topics);
}

/// Entries scanned after an open title for the fragment that closes it.
const MERGE_LOOKAHEAD: usize = 3;

/// How many entries after `open` must be folded into it to balance its
/// parentheses, if a close appears within [`MERGE_LOOKAHEAD`] entries.
fn closing_offset(balances: &[i32], open: usize) -> Option<usize> {
    let mut running = balances[open];
    balances[open + 1..]
        .iter()
        .take(MERGE_LOOKAHEAD)
        .position(|b| {
            running += b;
            running <= 0
        })
        .map(|pos| pos + 1)
}

fn merge_pass(chapters: Vec<Chapter>, actions: &mut Vec<HealAction>) -> Vec<Chapter> {
    let balances: Vec<i32> = chapters
        .iter()
        .map(|c| paren_balance(&c.chapter_name))
        .collect();

    let mut out: Vec<Chapter> = Vec::with_capacity(chapters.len());
    let mut pending = 0usize;
    for (i, chapter) in chapters.into_iter().enumerate() {
        if let Some(last) = out.last_mut() {
            let continues = pending > 0
                || has_leading_unmatched_closer(&chapter.chapter_name)
                || chapter.chapter_name.is_empty();
            if continues {
                pending = pending.saturating_sub(1);
                actions.push(HealAction::Merged {
                    into: last.chapter_name.clone(),
                    fragment: chapter.chapter_name.clone(),
                });
                absorb(last, chapter);
                continue;
            }
        }
        pending = if balances[i] > 0 {
            closing_offset(&balances, i).unwrap_or(0)
        } else {
            0
        };
        out.push(chapter);
    }
    out
}

fn split_pass(chapters: Vec<Chapter>, actions: &mut Vec<HealAction>) -> Vec<Chapter> {
    let mut out = Vec::with_capacity(chapters.len());
    for mut chapter in chapters {
        let parts = split_title(&chapter.chapter_name);
        if parts.len() < 2 {
            out.push(chapter);
            continue;
        }
        actions.push(HealAction::Split {
            original: chapter.chapter_name.clone(),
            parts: parts.clone(),
        });
        let mut parts = parts.into_iter();
        let domain = chapter.domain.clone();
        let no = chapter.chapter_no;
        if let Some(first) = parts.next() {
            chapter.chapter_name = first;
        }
        out.push(chapter);
        for part in parts {
            let mut extra = Chapter::new(no, part);
            extra.domain = domain.clone();
            out.push(extra);
        }
    }
    out
}

/// Lowercase slug: alphanumerics kept, everything else collapsed to `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "syllabus".to_string()
    } else {
        slug
    }
}

/// Renumber chapters from 1 and regenerate chapter/topic ids from the
/// subject slug. Prerequisites are remapped to the new topic ids; ones that
/// referenced unknown topics are dropped.
pub fn reindex(doc: &mut SyllabusDocument) -> Vec<HealAction> {
    let mut actions = Vec::new();
    let prefix = slugify(&doc.subject);

    let mut id_map: HashMap<String, String> = HashMap::new();
    for (ci, chapter) in doc.chapters.iter_mut().enumerate() {
        let no = ci as u32 + 1;
        if chapter.chapter_no != no {
            actions.push(HealAction::Renumbered {
                from: chapter.chapter_no,
                to: no,
            });
            chapter.chapter_no = no;
        }
        let chapter_id = format!("{prefix}-ch{no:02}");
        if chapter.chapter_id != chapter_id {
            actions.push(HealAction::IdChanged {
                from: std::mem::take(&mut chapter.chapter_id),
                to: chapter_id.clone(),
            });
            chapter.chapter_id = chapter_id.clone();
        }
        for (ti, topic) in chapter.topics.iter_mut().enumerate() {
            let topic_id = format!("{chapter_id}-t{:02}", ti + 1);
            if !topic.topic_id.is_empty() {
                id_map
                    .entry(topic.topic_id.clone())
                    .or_insert_with(|| topic_id.clone());
            }
            if topic.topic_id != topic_id {
                actions.push(HealAction::IdChanged {
                    from: std::mem::replace(&mut topic.topic_id, topic_id.clone()),
                    to: topic_id,
                });
            }
        }
    }

    for chapter in &mut doc.chapters {
        for topic in &mut chapter.topics {
            let mut kept = Vec::with_capacity(topic.prerequisites.len());
            for prereq in topic.prerequisites.drain(..) {
                match id_map.get(&prereq) {
                    Some(new_id) if *new_id != topic.topic_id && !kept.contains(new_id) => {
                        kept.push(new_id.clone())
                    }
                    Some(_) => {}
                    None => actions.push(HealAction::PrerequisiteDropped {
                        topic_id: topic.topic_id.clone(),
                        prerequisite: prereq,
                    }),
                }
            }
            topic.prerequisites = kept;
        }
    }

    actions
}

/// Run every repair pass over `doc`, returning the healed copy and a report.
pub fn heal(doc: &SyllabusDocument) -> (SyllabusDocument, HealReport) {
    let mut actions = Vec::new();
    let mut healed = doc.clone();

    for chapter in &mut healed.chapters {
        chapter.chapter_name = normalize_name(&chapter.chapter_name);
        for topic in &mut chapter.topics {
            topic.name = normalize_name(&topic.name);
        }
    }

    let merged = merge_pass(std::mem::take(&mut healed.chapters), &mut actions);
    let split = split_pass(merged, &mut actions);

    healed.chapters = split
        .into_iter()
        .filter(|c| {
            let empty = c.chapter_name.is_empty() && c.topics.is_empty();
            if empty {
                actions.push(HealAction::DroppedEmpty {
                    chapter_no: c.chapter_no,
                });
            }
            !empty
        })
        .collect();

    actions.extend(reindex(&mut healed));

    for chapter in &healed.chapters {
        if is_unbalanced(&chapter.chapter_name) {
            actions.push(HealAction::Unresolved {
                chapter_name: chapter.chapter_name.clone(),
            });
        }
    }

    let report = HealReport {
        chapters_before: doc.chapters.len(),
        chapters_after: healed.chapters.len(),
        actions,
    };
    (healed, report)
}
