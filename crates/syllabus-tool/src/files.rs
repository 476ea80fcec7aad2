//! Reading and writing syllabus files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use schoolhub_core::syllabus::SyllabusDocument;

/// Expand files and directories into a sorted list of `.json` files.
pub fn collect_json_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            anyhow::bail!("'{}' does not exist", path.display());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

/// Load a syllabus file. A missing `subject` is taken from the file stem.
pub fn load_document(path: &Path) -> anyhow::Result<SyllabusDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut doc = SyllabusDocument::from_json_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if doc.subject.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            doc.subject = stem.to_string();
        }
    }
    Ok(doc)
}

pub fn write_document(doc: &SyllabusDocument, path: &Path) -> anyhow::Result<()> {
    let json = doc.to_pretty_json()?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_searched_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cbse").join("6");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("science.json"), "{}").unwrap();
        std::fs::write(nested.join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("maths.json"), "{}").unwrap();

        let files = collect_json_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = collect_json_files(&[PathBuf::from("/no/such/syllabus")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn subject_defaults_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geography.json");
        std::fs::write(&path, r#"{"chapters": []}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.subject, "geography");
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
