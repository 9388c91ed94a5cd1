use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config;

const LOG_FILE_NAME: &str = "install.log";

pub fn logs_dir(root: &Path) -> PathBuf {
    root.join(config::LOG_DIR)
}

pub fn init(root: &Path) -> Result<PathBuf> {
    let dir = logs_dir(root);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let log_path = dir.join(LOG_FILE_NAME);
    log_line(
        Some(&log_path),
        &format!("{} {} install log start", config::NAME, config::VERSION),
    )?;
    Ok(log_path)
}

pub fn log_line(path: Option<&Path>, line: &str) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    writeln!(file, "{line}").with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Progress message: stdout, mirrored into the log file when there is one.
pub fn info(path: Option<&Path>, line: &str) {
    println!("{line}");
    let _ = log_line(path, line);
}

pub fn warn(path: Option<&Path>, line: &str) {
    eprintln!("warning: {line}");
    let _ = log_line(path, &format!("warning: {line}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_log_file() {
        let tmp = tempfile::tempdir().unwrap();
        let log_path = init(tmp.path()).unwrap();
        assert!(log_path.exists());
        assert_eq!(log_path, logs_dir(tmp.path()).join(LOG_FILE_NAME));

        let header = fs::read_to_string(&log_path).unwrap();
        assert!(header.starts_with(&format!("{} {}", config::NAME, config::VERSION)));
    }

    #[test]
    fn warn_and_info_append_to_log() {
        let tmp = tempfile::tempdir().unwrap();
        let log_path = init(tmp.path()).unwrap();
        info(Some(&log_path), "copied");
        warn(Some(&log_path), "missing key");

        let out = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "copied");
        assert_eq!(lines[2], "warning: missing key");
    }

    #[test]
    fn log_line_without_path_is_noop() {
        log_line(None, "ignored").unwrap();
    }
}
