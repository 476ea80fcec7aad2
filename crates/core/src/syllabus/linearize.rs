//! Topic linearizer: turns a chapter/topic syllabus into a teaching
//! sequence and slices it into weeks.
//!
//! Week `w` (1-based) covers linear indexes
//! `[(w - 1) * per_week, w * per_week)`. Everything before the window is
//! completed, everything inside is in progress, everything after is
//! upcoming.

use serde::Serialize;

use crate::error::CoreError;
use crate::syllabus::model::{SyllabusDocument, Topic};

/// Progress state of one topic relative to the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Completed,
    InProgress,
    Upcoming,
}

/// A topic at its position in the teaching sequence.
#[derive(Debug, Clone, Serialize)]
pub struct LinearTopic {
    /// 0-based position in the flattened sequence.
    pub index: usize,
    pub chapter_id: String,
    pub chapter_no: u32,
    pub chapter_name: String,
    pub topic: Topic,
}

/// A linear topic with its status for a given week.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedTopic {
    #[serde(flatten)]
    pub item: LinearTopic,
    pub status: TopicStatus,
}

/// The curriculum-progress view for one week.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlan {
    pub week: u32,
    pub per_week: u32,
    pub total_topics: usize,
    pub total_weeks: u32,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub upcoming_count: usize,
    /// Completed topics as a percentage of all topics (0 for an empty syllabus).
    pub progress_percent: f64,
    /// Sum of estimated minutes for this week's topics.
    pub week_minutes: u32,
    pub items: Vec<PlannedTopic>,
}

impl WeeklyPlan {
    /// Topics scheduled for this week.
    pub fn this_week(&self) -> impl Iterator<Item = &PlannedTopic> {
        self.items
            .iter()
            .filter(|p| p.status == TopicStatus::InProgress)
    }
}

/// The topics taught in one week of the term.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSlice {
    pub week: u32,
    pub topics: Vec<LinearTopic>,
}

/// Flatten chapters into the teaching sequence, preserving document order.
pub fn linearize(doc: &SyllabusDocument) -> Vec<LinearTopic> {
    doc.chapters
        .iter()
        .flat_map(|chapter| {
            chapter.topics.iter().map(move |topic| (chapter, topic))
        })
        .enumerate()
        .map(|(index, (chapter, topic))| LinearTopic {
            index,
            chapter_id: chapter.chapter_id.clone(),
            chapter_no: chapter.chapter_no,
            chapter_name: chapter.chapter_name.clone(),
            topic: topic.clone(),
        })
        .collect()
}

/// Validate the week number and per-week class count.
pub fn validate_week_params(week: u32, per_week: u32) -> Result<(), CoreError> {
    if week == 0 {
        return Err(CoreError::Validation("week must be at least 1".into()));
    }
    if per_week == 0 {
        return Err(CoreError::Validation(
            "per_week must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Status of the item at `index` for the window starting at `start`.
pub fn status_at(index: usize, start: usize, per_week: usize) -> TopicStatus {
    if index < start {
        TopicStatus::Completed
    } else if index < start.saturating_add(per_week) {
        TopicStatus::InProgress
    } else {
        TopicStatus::Upcoming
    }
}

/// Build the progress view for `week` with `per_week` topics per week.
pub fn plan_week(
    doc: &SyllabusDocument,
    week: u32,
    per_week: u32,
) -> Result<WeeklyPlan, CoreError> {
    validate_week_params(week, per_week)?;

    let per = per_week as usize;
    let start = (week as usize - 1).saturating_mul(per);
    let linear = linearize(doc);
    let total_topics = linear.len();

    let items: Vec<PlannedTopic> = linear
        .into_iter()
        .map(|item| {
            let status = status_at(item.index, start, per);
            PlannedTopic { item, status }
        })
        .collect();

    let count = |s: TopicStatus| items.iter().filter(|p| p.status == s).count();
    let completed_count = count(TopicStatus::Completed);
    let in_progress_count = count(TopicStatus::InProgress);
    let upcoming_count = count(TopicStatus::Upcoming);

    let progress_percent = if total_topics == 0 {
        0.0
    } else {
        completed_count as f64 * 100.0 / total_topics as f64
    };

    let week_minutes = items
        .iter()
        .filter(|p| p.status == TopicStatus::InProgress)
        .map(|p| p.item.topic.estimated_minutes)
        .sum();

    Ok(WeeklyPlan {
        week,
        per_week,
        total_topics,
        total_weeks: total_topics.div_ceil(per) as u32,
        completed_count,
        in_progress_count,
        upcoming_count,
        progress_percent,
        week_minutes,
        items,
    })
}

/// Split the whole sequence into consecutive weeks of `per_week` topics.
pub fn weekly_breakdown(
    doc: &SyllabusDocument,
    per_week: u32,
) -> Result<Vec<WeekSlice>, CoreError> {
    validate_week_params(1, per_week)?;

    let linear = linearize(doc);
    Ok(linear
        .chunks(per_week as usize)
        .enumerate()
        .map(|(i, chunk)| WeekSlice {
            week: i as u32 + 1,
            topics: chunk.to_vec(),
        })
        .collect())
}
