//! Read-only access to syllabus files on disk.
//!
//! Layout: `{root}/{board}/{standard}/{subject}.json`. Every path segment
//! comes from a request, so each is checked against
//! [`validate_segment`] before touching the filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::syllabus::model::{Chapter, SyllabusDocument};

/// Maximum length of one path segment.
pub const MAX_SEGMENT_LEN: usize = 64;

/// Validate one board/standard/subject segment: `[A-Za-z0-9_-]{1,64}`.
pub fn validate_segment(kind: &str, segment: &str) -> Result<(), CoreError> {
    let ok = !segment.is_empty()
        && segment.len() <= MAX_SEGMENT_LEN
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid {kind} '{segment}'")))
    }
}

#[derive(Debug, Clone)]
pub struct SyllabusStore {
    root: PathBuf,
}

impl SyllabusStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Boards available under the root, sorted.
    pub fn list_boards(&self) -> Result<Vec<String>, CoreError> {
        let mut boards = list_entries(&self.root, EntryKind::Dir)?;
        boards.sort();
        Ok(boards)
    }

    /// Standards available for a board, numeric ones first in numeric order.
    pub fn list_standards(&self, board: &str) -> Result<Vec<String>, CoreError> {
        validate_segment("board", board)?;
        let dir = self.root.join(board);
        if !dir.is_dir() {
            return Err(CoreError::NotFoundKey {
                entity: "Board",
                key: board.to_string(),
            });
        }
        let mut standards = list_entries(&dir, EntryKind::Dir)?;
        standards.sort_by_key(|s| (s.parse::<u32>().unwrap_or(u32::MAX), s.clone()));
        Ok(standards)
    }

    /// Subjects available for a board and standard, sorted.
    pub fn list_subjects(&self, board: &str, standard: &str) -> Result<Vec<String>, CoreError> {
        validate_segment("board", board)?;
        validate_segment("standard", standard)?;
        let dir = self.root.join(board).join(standard);
        if !dir.is_dir() {
            return Err(CoreError::NotFoundKey {
                entity: "Standard",
                key: format!("{board}/{standard}"),
            });
        }
        let mut subjects = list_entries(&dir, EntryKind::JsonFile)?;
        subjects.sort();
        Ok(subjects)
    }

    /// Path of a subject's syllabus file (segments validated).
    pub fn document_path(
        &self,
        board: &str,
        standard: &str,
        subject: &str,
    ) -> Result<PathBuf, CoreError> {
        validate_segment("board", board)?;
        validate_segment("standard", standard)?;
        validate_segment("subject", subject)?;
        Ok(self
            .root
            .join(board)
            .join(standard)
            .join(format!("{subject}.json")))
    }

    /// Load a subject's syllabus. Missing `board`/`standard`/`subject`
    /// fields in the file are filled from the path.
    pub fn load(
        &self,
        board: &str,
        standard: &str,
        subject: &str,
    ) -> Result<SyllabusDocument, CoreError> {
        let path = self.document_path(board, standard, subject)?;
        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CoreError::NotFoundKey {
                entity: "Syllabus",
                key: format!("{board}/{standard}/{subject}"),
            },
            _ => CoreError::Internal(format!("Failed to read {}: {e}", path.display())),
        })?;

        let mut doc = SyllabusDocument::from_json_str(&text).map_err(|e| {
            CoreError::Internal(format!("Malformed syllabus file {}: {e}", path.display()))
        })?;
        if doc.board.is_empty() {
            doc.board = board.to_string();
        }
        if doc.standard.is_empty() {
            doc.standard = standard.to_string();
        }
        if doc.subject.is_empty() {
            doc.subject = subject.to_string();
        }
        Ok(doc)
    }

    /// Load one chapter of a subject's syllabus.
    pub fn load_chapter(
        &self,
        board: &str,
        standard: &str,
        subject: &str,
        chapter_id: &str,
    ) -> Result<Chapter, CoreError> {
        let doc = self.load(board, standard, subject)?;
        doc.chapter(chapter_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFoundKey {
                entity: "Chapter",
                key: chapter_id.to_string(),
            })
    }
}

#[derive(Clone, Copy)]
enum EntryKind {
    Dir,
    JsonFile,
}

/// Names of valid entries of `kind` in `dir`. A missing root lists nothing.
fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>, CoreError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(CoreError::Internal(format!(
                "Failed to list {}: {e}",
                dir.display()
            )))
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| CoreError::Internal(format!("Failed to list {}: {e}", dir.display())))?;
        let path = entry.path();
        let name = match kind {
            EntryKind::Dir if path.is_dir() => path.file_name(),
            EntryKind::JsonFile
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") =>
            {
                path.file_stem()
            }
            _ => None,
        };
        if let Some(name) = name.and_then(|n| n.to_str()) {
            if validate_segment("entry", name).is_ok() {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
