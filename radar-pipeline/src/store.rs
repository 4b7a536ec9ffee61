//! Document store for the pipeline's JSON outputs
//!
//! The whole document is serialized in memory, written to a `.tmp` sibling
//! and renamed over the destination, so the previous file survives a crash
//! at any point before the rename. Disk failures are the one fatal error
//! class in the pipeline and propagate to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use radar_core::{NewsDocument, PlayerDossier};
use tracing::info;

/// Errors from reading or writing output documents
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

/// Write `contents` to `path`, replacing any previous file atomically
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Save the news pipeline's output document
pub fn save_news_document(path: &Path, doc: &NewsDocument) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(doc)?;
    write_atomic(path, &json)?;
    info!(
        "Wrote news document with {} players to {}",
        doc.by_player.len(),
        path.display()
    );
    Ok(())
}

/// Save a player dossier
pub fn save_dossier(path: &Path, dossier: &PlayerDossier) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(dossier)?;
    write_atomic(path, &json)?;
    info!(
        "Wrote dossier for {} ({} items) to {}",
        dossier.player,
        dossier.news.all.len(),
        path.display()
    );
    Ok(())
}

/// Load a previously written dossier
///
/// A missing file is `Ok(None)`; the first merge run starts from nothing.
/// An unreadable or corrupt file is an error: silently discarding a stored
/// collection would lose data.
pub fn load_dossier(path: &Path) -> Result<Option<PlayerDossier>, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_dossier;
    use chrono::Utc;
    use std::collections::BTreeMap;

    #[test]
    fn test_dossier_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player-abde.json");

        let dossier = merge_dossier(None, Vec::new(), "Abde Ezzalzouli", Utc::now());
        save_dossier(&path, &dossier).unwrap();

        let loaded = load_dossier(&path).unwrap().expect("dossier should exist");
        assert_eq!(loaded.player, "Abde Ezzalzouli");
        assert_eq!(loaded.version, dossier.version);
    }

    #[test]
    fn test_missing_dossier_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_dossier(&dir.path().join("absent.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_corrupt_dossier_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("player-abde.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_dossier(&path).is_err());
    }

    #[test]
    fn test_replace_keeps_previous_file_until_rename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("news-data.json");

        let doc = NewsDocument {
            by_player: BTreeMap::new(),
            metrics: BTreeMap::new(),
            timestamp: Utc::now().to_rfc3339(),
        };
        save_news_document(&path, &doc).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        // A second write fully replaces the file, and no temp file lingers.
        save_news_document(&path, &doc).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
        assert!(!tmp_path(&path).exists());
    }
}
