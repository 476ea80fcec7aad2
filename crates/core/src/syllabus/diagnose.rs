//! Read-only checks that flag malformed syllabus entries.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::syllabus::heal::{is_unbalanced, split_title};
use crate::syllabus::model::SyllabusDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    EmptyChapterName,
    UnbalancedParentheses { chapter_name: String },
    EmbeddedChapterMarker { chapter_name: String },
    DuplicateChapterNo { chapter_no: u32 },
    NonSequentialChapterNo { expected: u32, found: u32 },
    DuplicateChapterId { chapter_id: String },
    DuplicateTopicId { topic_id: String },
    EmptyTopicName,
    ChapterWithoutTopics,
    UnknownPrerequisite { topic_id: String, prerequisite: String },
    ForwardPrerequisite { topic_id: String, prerequisite: String },
}

/// A problem found at a chapter position (0-based index into `chapters`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub chapter_index: usize,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::ChapterWithoutTopics
            | IssueKind::NonSequentialChapterNo { .. }
            | IssueKind::ForwardPrerequisite { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Run every check over `doc`.
pub fn diagnose(doc: &SyllabusDocument) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut push = |chapter_index: usize, kind: IssueKind| {
        issues.push(Issue {
            chapter_index,
            severity: kind.severity(),
            kind,
        });
    };

    let mut seen_numbers = HashSet::new();
    let mut seen_chapter_ids = HashSet::new();
    let mut seen_topic_ids = HashSet::new();
    // topic id -> linear position, for prerequisite ordering.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut position = 0usize;

    for (ci, chapter) in doc.chapters.iter().enumerate() {
        let name = chapter.chapter_name.trim();
        if name.is_empty() {
            push(ci, IssueKind::EmptyChapterName);
        } else {
            if is_unbalanced(name) {
                push(
                    ci,
                    IssueKind::UnbalancedParentheses {
                        chapter_name: name.to_string(),
                    },
                );
            }
            if split_title(name).len() > 1 {
                push(
                    ci,
                    IssueKind::EmbeddedChapterMarker {
                        chapter_name: name.to_string(),
                    },
                );
            }
        }

        let expected = ci as u32 + 1;
        if !seen_numbers.insert(chapter.chapter_no) {
            push(
                ci,
                IssueKind::DuplicateChapterNo {
                    chapter_no: chapter.chapter_no,
                },
            );
        } else if chapter.chapter_no != expected {
            push(
                ci,
                IssueKind::NonSequentialChapterNo {
                    expected,
                    found: chapter.chapter_no,
                },
            );
        }

        if !chapter.chapter_id.is_empty() && !seen_chapter_ids.insert(chapter.chapter_id.as_str()) {
            push(
                ci,
                IssueKind::DuplicateChapterId {
                    chapter_id: chapter.chapter_id.clone(),
                },
            );
        }

        if chapter.topics.is_empty() {
            push(ci, IssueKind::ChapterWithoutTopics);
        }

        for topic in &chapter.topics {
            if topic.name.trim().is_empty() {
                push(ci, IssueKind::EmptyTopicName);
            }
            if !topic.topic_id.is_empty() {
                if !seen_topic_ids.insert(topic.topic_id.as_str()) {
                    push(
                        ci,
                        IssueKind::DuplicateTopicId {
                            topic_id: topic.topic_id.clone(),
                        },
                    );
                } else {
                    positions.insert(topic.topic_id.as_str(), position);
                }
            }
            position += 1;
        }
    }

    position = 0;
    for (ci, chapter) in doc.chapters.iter().enumerate() {
        for topic in &chapter.topics {
            for prereq in &topic.prerequisites {
                match positions.get(prereq.as_str()) {
                    None => push(
                        ci,
                        IssueKind::UnknownPrerequisite {
                            topic_id: topic.topic_id.clone(),
                            prerequisite: prereq.clone(),
                        },
                    ),
                    Some(&p) if p >= position => push(
                        ci,
                        IssueKind::ForwardPrerequisite {
                            topic_id: topic.topic_id.clone(),
                            prerequisite: prereq.clone(),
                        },
                    ),
                    Some(_) => {}
                }
            }
            position += 1;
        }
    }

    issues
}

/// Count of error-severity issues.
pub fn error_count(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::heal::heal;
    use crate::syllabus::model::{Chapter, Topic};

    fn topic(id: &str, name: &str, prereqs: &[&str]) -> Topic {
        let mut t = Topic::named(name);
        t.topic_id = id.into();
        t.prerequisites = prereqs.iter().map(|p| p.to_string()).collect();
        t
    }

    fn doc(chapters: Vec<Chapter>) -> SyllabusDocument {
        SyllabusDocument {
            board: "cbse".into(),
            standard: "7".into(),
            subject: "science".into(),
            chapters,
        }
    }

    fn kinds(issues: &[Issue]) -> Vec<&IssueKind> {
        issues.iter().map(|i| &i.kind).collect()
    }

    #[test]
    fn clean_document_has_no_issues() {
        let mut c1 = Chapter::new(1, "Nutrition in Plants");
        c1.topics = vec![topic("s-1", "Photosynthesis", &[])];
        let mut c2 = Chapter::new(2, "Nutrition in Animals");
        c2.topics = vec![topic("s-2", "Digestion", &["s-1"])];

        assert!(diagnose(&doc(vec![c1, c2])).is_empty());
    }

    #[test]
    fn malformed_names_are_flagged() {
        let mut c1 = Chapter::new(1, "Heat (Transfer");
        c1.topics = vec![Topic::named("Conduction")];
        let mut c2 = Chapter::new(2, "Acids 5. Bases");
        c2.topics = vec![Topic::named("Indicators")];
        let c3 = Chapter::new(3, "");

        let issues = diagnose(&doc(vec![c1, c2, c3]));
        let k = kinds(&issues);
        assert!(k.contains(&&IssueKind::UnbalancedParentheses {
            chapter_name: "Heat (Transfer".into()
        }));
        assert!(k.contains(&&IssueKind::EmbeddedChapterMarker {
            chapter_name: "Acids 5. Bases".into()
        }));
        assert!(k.contains(&&IssueKind::EmptyChapterName));
        assert!(k.contains(&&IssueKind::ChapterWithoutTopics));
        assert_eq!(error_count(&issues), 3);
    }

    #[test]
    fn numbering_problems_are_flagged() {
        let mut c1 = Chapter::new(1, "A");
        c1.topics = vec![Topic::named("x")];
        let mut c2 = Chapter::new(1, "B");
        c2.topics = vec![Topic::named("y")];
        let mut c3 = Chapter::new(5, "C");
        c3.topics = vec![Topic::named("z")];

        let issues = diagnose(&doc(vec![c1, c2, c3]));
        assert_eq!(
            kinds(&issues),
            [
                &IssueKind::DuplicateChapterNo { chapter_no: 1 },
                &IssueKind::NonSequentialChapterNo { expected: 3, found: 5 },
            ]
        );
    }

    #[test]
    fn prerequisite_problems_are_flagged() {
        let mut c1 = Chapter::new(1, "A");
        c1.topics = vec![
            topic("t1", "first", &["t2"]),
            topic("t2", "second", &["missing"]),
            topic("t2", "dup", &[]),
        ];

        let issues = diagnose(&doc(vec![c1]));
        let k = kinds(&issues);
        assert!(k.contains(&&IssueKind::DuplicateTopicId { topic_id: "t2".into() }));
        assert!(k.contains(&&IssueKind::ForwardPrerequisite {
            topic_id: "t1".into(),
            prerequisite: "t2".into()
        }));
        assert!(k.contains(&&IssueKind::UnknownPrerequisite {
            topic_id: "t2".into(),
            prerequisite: "missing".into()
        }));
    }

    #[test]
    fn healing_clears_structural_errors() {
        let mut c1 = Chapter::new(1, "Light (Shadows and");
        c1.topics = vec![Topic::named("Shadows")];
        let mut c2 = Chapter::new(2, "Reflections)");
        c2.topics = vec![Topic::named("Mirrors")];

        let broken = doc(vec![c1, c2]);
        assert!(error_count(&diagnose(&broken)) > 0);

        let (healed, _) = heal(&broken);
        assert_eq!(error_count(&diagnose(&healed)), 0);
    }
}
