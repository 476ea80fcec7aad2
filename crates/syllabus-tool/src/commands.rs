//! Subcommand handlers.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use schoolhub_core::syllabus::diagnose::{diagnose, Issue, IssueKind, Severity};
use schoolhub_core::syllabus::heal::{heal as heal_document, reindex as reindex_document, HealAction};
use schoolhub_core::syllabus::linearize::{weekly_breakdown, TopicStatus};
use schoolhub_core::syllabus::{plan_week, SyllabusDocument};

use crate::cli::{CheckArgs, HealArgs, OutputArgs, PlanArgs, RewriteArgs};
use crate::files::{collect_json_files, load_document, write_document};

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

/// Issues found in one file.
struct FileReport {
    path: PathBuf,
    issues: Vec<Issue>,
}

impl FileReport {
    fn failing(&self, strict: bool) -> usize {
        self.issues
            .iter()
            .filter(|i| strict || i.severity == Severity::Error)
            .count()
    }
}

fn check_files(files: &[PathBuf]) -> anyhow::Result<Vec<FileReport>> {
    files
        .iter()
        .map(|path| {
            let doc = load_document(path)?;
            Ok(FileReport {
                path: path.clone(),
                issues: diagnose(&doc),
            })
        })
        .collect()
}

pub fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let files = collect_json_files(&args.paths)?;
    tracing::debug!(count = files.len(), "Checking syllabus files");
    let reports = check_files(&files)?;

    let mut failing_files = 0;
    for report in &reports {
        for issue in &report.issues {
            if args.json {
                let line = serde_json::json!({
                    "file": report.path.display().to_string(),
                    "issue": issue,
                });
                println!("{line}");
            } else {
                println!(
                    "{}: chapter {}: {}: {}",
                    report.path.display(),
                    issue.chapter_index + 1,
                    severity_label(issue.severity),
                    describe_issue(&issue.kind),
                );
            }
        }
        if report.failing(args.strict) > 0 {
            failing_files += 1;
        }
    }

    if !args.json {
        println!(
            "{} file(s) checked, {} with problems",
            reports.len(),
            failing_files
        );
    }
    if failing_files > 0 {
        anyhow::bail!("{failing_files} syllabus file(s) failed the check");
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

fn describe_issue(kind: &IssueKind) -> String {
    match kind {
        IssueKind::EmptyChapterName => "chapter has no name".to_string(),
        IssueKind::UnbalancedParentheses { chapter_name } => {
            format!("unbalanced parentheses in '{chapter_name}'")
        }
        IssueKind::EmbeddedChapterMarker { chapter_name } => {
            format!("'{chapter_name}' looks like several chapters")
        }
        IssueKind::DuplicateChapterNo { chapter_no } => {
            format!("chapter number {chapter_no} is used twice")
        }
        IssueKind::NonSequentialChapterNo { expected, found } => {
            format!("expected chapter number {expected}, found {found}")
        }
        IssueKind::DuplicateChapterId { chapter_id } => {
            format!("chapter id '{chapter_id}' is used twice")
        }
        IssueKind::DuplicateTopicId { topic_id } => format!("topic id '{topic_id}' is used twice"),
        IssueKind::EmptyTopicName => "topic has no name".to_string(),
        IssueKind::ChapterWithoutTopics => "chapter has no topics".to_string(),
        IssueKind::UnknownPrerequisite {
            topic_id,
            prerequisite,
        } => format!("'{topic_id}' requires unknown topic '{prerequisite}'"),
        IssueKind::ForwardPrerequisite {
            topic_id,
            prerequisite,
        } => format!("'{topic_id}' requires '{prerequisite}', which is taught later"),
    }
}

// ---------------------------------------------------------------------------
// heal / reindex
// ---------------------------------------------------------------------------

/// Heal a file. The document goes to stdout (or the chosen file), the
/// change report to stderr.
pub fn heal(args: &HealArgs) -> anyhow::Result<()> {
    heal_to(args, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn heal_to(args: &HealArgs, out: &mut impl Write, report_to: &mut impl Write) -> anyhow::Result<()> {
    let doc = load_document(&args.path)?;
    let (healed, report) = heal_document(&doc);

    for action in &report.actions {
        writeln!(report_to, "{}", describe_action(action))?;
    }
    writeln!(
        report_to,
        "{} chapter(s) before, {} after, {} change(s)",
        report.chapters_before,
        report.chapters_after,
        report.actions.len()
    )?;
    let unresolved = report.unresolved();
    if !unresolved.is_empty() {
        tracing::warn!(count = unresolved.len(), "Some chapter names are still unbalanced");
    }

    emit(&healed, &args.path, &args.output, out)
}

pub fn reindex(args: &RewriteArgs) -> anyhow::Result<()> {
    reindex_to(args, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn reindex_to(
    args: &RewriteArgs,
    out: &mut impl Write,
    report_to: &mut impl Write,
) -> anyhow::Result<()> {
    let mut doc = load_document(&args.path)?;
    let actions = reindex_document(&mut doc);

    for action in &actions {
        writeln!(report_to, "{}", describe_action(action))?;
    }
    writeln!(report_to, "{} change(s)", actions.len())?;

    emit(&doc, &args.path, &args.output, out)
}

/// Write `doc` where the output flags say. Without `--out` or
/// `--in-place` the JSON goes to `out`.
fn emit(
    doc: &SyllabusDocument,
    input: &Path,
    output: &OutputArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if output.dry_run {
        return Ok(());
    }
    let target = match (&output.out, output.in_place) {
        (Some(path), _) => path.as_path(),
        (None, true) => input,
        (None, false) => {
            out.write_all(doc.to_pretty_json()?.as_bytes())?;
            out.flush()?;
            return Ok(());
        }
    };
    write_document(doc, target)?;
    tracing::info!(path = %target.display(), "Syllabus written");
    Ok(())
}

fn describe_action(action: &HealAction) -> String {
    match action {
        HealAction::Merged { into, fragment } => format!("merged '{fragment}' into '{into}'"),
        HealAction::Split { original, parts } => {
            format!("split '{original}' into {}", parts.join(" | "))
        }
        HealAction::DroppedEmpty { chapter_no } => {
            format!("dropped empty chapter {chapter_no}")
        }
        HealAction::Renumbered { from, to } => format!("renumbered chapter {from} -> {to}"),
        HealAction::IdChanged { from, to } if from.is_empty() => format!("assigned id {to}"),
        HealAction::IdChanged { from, to } => format!("id {from} -> {to}"),
        HealAction::PrerequisiteDropped {
            topic_id,
            prerequisite,
        } => format!("dropped unknown prerequisite '{prerequisite}' of {topic_id}"),
        HealAction::Unresolved { chapter_name } => {
            format!("still unbalanced: '{chapter_name}'")
        }
    }
}

// ---------------------------------------------------------------------------
// plan
// ---------------------------------------------------------------------------

pub fn plan(args: &PlanArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.path)?;

    match args.week {
        Some(week) => {
            let plan = plan_week(&doc, week, args.per_week)?;
            println!(
                "Week {} of {} ({} per week), {:.0}% complete",
                plan.week, plan.total_weeks, plan.per_week, plan.progress_percent
            );
            for item in &plan.items {
                let mark = match item.status {
                    TopicStatus::Completed => "x",
                    TopicStatus::InProgress => ">",
                    TopicStatus::Upcoming => " ",
                };
                println!(
                    "[{mark}] {:>3}. {} / {}",
                    item.item.index + 1,
                    item.item.chapter_name,
                    item.item.topic.name
                );
            }
            println!("This week: {} minute(s)", plan.week_minutes);
        }
        None => {
            for slice in weekly_breakdown(&doc, args.per_week)? {
                println!("Week {}", slice.week);
                for topic in &slice.topics {
                    println!("  {} / {}", topic.chapter_name, topic.topic.name);
                }
            }
        }
    }
    Ok(())
}
