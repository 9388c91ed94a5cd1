use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::logging;

/// A sound file to register: the event it maps to and where it was installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    pub key_name: String,
    pub path: PathBuf,
}

/// Event name for a sound file: everything before the last `.`.
pub fn key_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Lists the files (not directories) directly under `root/folder`, sorted by
/// file name, ignoring case. An unreadable directory is reported and yields no entries.
pub fn list_sounds(root: &Path, folder: &str, log: Option<&Path>) -> Vec<SoundEntry> {
    let dir = root.join(folder);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn(log, &format!("failed to open directory {}: {err}", dir.display()));
            return Vec::new();
        }
    };

    let mut sounds = Vec::new();
    for ent in entries {
        let ent = match ent {
            Ok(ent) => ent,
            Err(err) => {
                logging::warn(log, &format!("skipping entry in {}: {err}", dir.display()));
                continue;
            }
        };
        let path = ent.path();
        if path.is_dir() {
            continue;
        }
        let file_name = ent.file_name().to_string_lossy().into_owned();
        sounds.push(SoundEntry {
            key_name: key_name(&file_name).to_string(),
            path,
        });
    }
    sounds.sort_by_cached_key(|s| {
        s.path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
    });
    sounds
}
