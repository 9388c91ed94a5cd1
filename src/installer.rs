use anyhow::{bail, Result};
use std::path::Path;

use crate::{config, fs_ops, logging, paths, registry, sounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Copied { files: u64 },
    AlreadyInstalled,
}

#[derive(Debug)]
pub struct Report {
    pub install: InstallOutcome,
    pub updated: Vec<String>,
    pub failed: Vec<String>,
    pub scheme_activated: bool,
}

impl Report {
    pub fn summary(&self) -> String {
        let install = match self.install {
            InstallOutcome::Copied { files } => format!("{files} files installed"),
            InstallOutcome::AlreadyInstalled => "already installed".to_string(),
        };
        let scheme = if self.scheme_activated {
            "scheme activated"
        } else {
            "scheme not activated"
        };
        format!(
            "{install}, {} sounds updated, {} failed, {scheme}",
            self.updated.len(),
            self.failed.len()
        )
    }
}

pub fn run(local_low: &Path, log_path: Option<&Path>) -> Result<Report> {
    let source_root = paths::source_root()?;
    run_with_deps(
        &source_root,
        local_low,
        registry::set_string_value,
        registry::list_subkeys,
        log_path,
    )
}

pub fn run_with_deps(
    source_root: &Path,
    local_low: &Path,
    mut set_value: impl FnMut(&str, &str, &str) -> Result<()>,
    list_subkeys: impl Fn(&str) -> Result<Vec<String>>,
    log_path: Option<&Path>,
) -> Result<Report> {
    let install = install_assets(source_root, local_low, config::ASSET_FOLDER, log_path)?;

    let entries = sounds::list_sounds(local_low, config::ASSET_FOLDER, log_path);
    warn_unknown_events(&entries, list_subkeys, log_path);

    let mut updated = Vec::new();
    let mut failed = Vec::new();
    for entry in &entries {
        let key = registry::event_key(&entry.key_name);
        match set_value(&key, "", &entry.path.to_string_lossy()) {
            Ok(()) => {
                logging::info(log_path, &format!("{} updated successfully!", entry.key_name));
                updated.push(entry.key_name.clone());
            }
            Err(err) => {
                logging::warn(log_path, &format!("{}: {err:#}", entry.key_name));
                failed.push(entry.key_name.clone());
            }
        }
    }

    let scheme_activated = match set_value(config::SCHEMES_KEY, "", config::SCHEME_NAME) {
        Ok(()) => true,
        Err(err) => {
            logging::warn(log_path, &format!("failed to activate scheme: {err:#}"));
            false
        }
    };

    Ok(Report {
        install,
        updated,
        failed,
        scheme_activated,
    })
}

/// Copies `source_root/folder` into `dest_root/folder` unless the destination
/// already exists. Existing contents are not compared against the source.
pub fn install_assets(
    source_root: &Path,
    dest_root: &Path,
    folder: &str,
    log_path: Option<&Path>,
) -> Result<InstallOutcome> {
    let source = paths::asset_dir(source_root, folder);
    let target = paths::asset_dir(dest_root, folder);

    if !source.is_dir() {
        bail!(
            "{folder} doesn't exist in {}, aborting",
            source_root.display()
        );
    }

    if target.exists() {
        logging::info(
            log_path,
            &format!("{folder} already exists in {}, skipping copy", dest_root.display()),
        );
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    logging::info(
        log_path,
        &format!("Copying folder from: {} to: {}", source.display(), target.display()),
    );
    let files = fs_ops::copy_dir_recursive(&source, &target)?;
    logging::info(log_path, &format!("Folder copied successfully! ({files} files)"));
    Ok(InstallOutcome::Copied { files })
}

fn warn_unknown_events(
    entries: &[sounds::SoundEntry],
    list_subkeys: impl Fn(&str) -> Result<Vec<String>>,
    log_path: Option<&Path>,
) {
    if entries.is_empty() {
        return;
    }
    let known = match list_subkeys(config::EVENTS_KEY) {
        Ok(known) => known,
        Err(err) => {
            logging::warn(log_path, &format!("skipping event check: {err:#}"));
            return;
        }
    };
    for entry in entries {
        if !known.iter().any(|k| k.eq_ignore_ascii_case(&entry.key_name)) {
            logging::warn(
                log_path,
                &format!(
                    "{} does not match any event under {}",
                    entry.key_name,
                    config::EVENTS_KEY
                ),
            );
        }
    }
}
