//! Note snapshot loading
//!
//! The engine itself never touches the filesystem; this module turns what is
//! on disk into an in-memory `Vec<Note>` for a single command run.
//!
//! Two layouts are supported:
//! - a JSON file holding an array of notes (`links`/`tags` keys are ignored
//!   and recomputed from `content`)
//! - a directory of markdown files, walked recursively

use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use notegraph_core::Note;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Load every note under `path`
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Note snapshot not found: {}", path.display()))?;

    let notes = if metadata.is_dir() {
        load_directory(path)?
    } else {
        load_json(path)?
    };

    info!(count = notes.len(), source = %path.display(), "Loaded notes");
    Ok(notes)
}

fn load_json(path: &Path) -> Result<Vec<Note>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse note snapshot {}", path.display()))
}

/// Each `.md` file becomes a note: id and path are the relative path without
/// the extension, the title is the file stem
fn load_directory(root: &Path) -> Result<Vec<Note>> {
    let mut notes = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        let file_path = entry.path();
        if !entry.file_type().is_file() || file_path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let Some(virtual_path) = virtual_path(root, file_path) else {
            debug!(path = %file_path.display(), "Skipping file outside snapshot root");
            continue;
        };

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %file_path.display(), "Skipping unreadable note: {}", err);
                continue;
            }
        };

        let (created_at, updated_at) = file_timestamps(file_path);
        let title = file_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        notes.push(
            Note::new(virtual_path.clone(), title, content)
                .with_path(virtual_path)
                .with_timestamps(created_at, updated_at),
        );
    }

    if notes.is_empty() {
        warn!("No markdown notes found under {}", root.display());
    }
    Ok(notes)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Relative path with `/` separators and no extension, e.g. `Work/Plan`
fn virtual_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}

fn file_timestamps(path: &Path) -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    let Ok(metadata) = fs::metadata(path) else {
        return (now, now);
    };
    let modified = metadata.modified().map(DateTime::<Utc>::from).unwrap_or(now);
    let created = metadata.created().map(DateTime::<Utc>::from).unwrap_or(modified);
    (created, modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_directory() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("Work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("Plan.md"), "See [[Budget]] #q3").unwrap();
        fs::write(temp.path().join("Budget.md"), "Numbers #q3").unwrap();
        fs::write(temp.path().join("readme.txt"), "not a note").unwrap();
        fs::create_dir(temp.path().join(".hidden")).unwrap();
        fs::write(temp.path().join(".hidden").join("Secret.md"), "x").unwrap();

        let notes = load_notes(temp.path()).unwrap();
        let paths: Vec<&str> = notes.iter().map(|n| n.path()).collect();
        assert_eq!(paths, vec!["Budget", "Work/Plan"]);

        let plan = &notes[1];
        assert_eq!(plan.id(), "Work/Plan");
        assert_eq!(plan.title(), "Plan");
        assert_eq!(plan.links(), ["Budget"]);
        assert_eq!(plan.folder(), Some("Work"));
    }

    #[test]
    fn test_empty_directory_is_an_empty_collection() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.txt"), "not a note").unwrap();
        assert!(load_notes(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.json");
        fs::write(
            &file,
            r##"[{"id":"1","title":"One","content":"#a","path":"X/One",
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]"##,
        )
        .unwrap();

        let notes = load_notes(&file).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].tags(), ["a"]);
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.json");
        fs::write(&file, "{not json").unwrap();

        let err = load_notes(&file).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(load_notes(&temp.path().join("absent")).is_err());
    }

    #[test]
    fn test_virtual_path() {
        let root = Path::new("/kiln");
        assert_eq!(
            virtual_path(root, Path::new("/kiln/A/B/note.md")),
            Some("A/B/note".to_string())
        );
        assert_eq!(virtual_path(root, Path::new("/other/note.md")), None);
    }
}
