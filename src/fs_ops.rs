use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Copies `src` into `dest` recursively and returns the number of files copied.
/// Nothing is cleaned up on failure, so `dest` may be left partially filled.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<u64> {
    fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;
    let entries = fs::read_dir(src).with_context(|| format!("read_dir {}", src.display()))?;

    let mut copied = 0;
    for ent in entries {
        let ent = ent.with_context(|| format!("read_dir {}", src.display()))?;
        let from = ent.path();
        let to = dest.join(ent.file_name());
        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("copy {} -> {}", from.display(), to.display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}
