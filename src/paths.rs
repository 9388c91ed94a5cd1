use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory the asset folder is copied from.
pub fn source_root() -> Result<PathBuf> {
    std::env::current_dir().context("current_dir")
}

pub fn asset_dir(root: &Path, folder: &str) -> PathBuf {
    root.join(folder)
}

/// Per-user `AppData\LocalLow` directory (`FOLDERID_LocalAppDataLow`).
#[cfg(windows)]
pub fn local_low_dir() -> Result<PathBuf> {
    use anyhow::bail;
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows_sys::Win32::UI::Shell::{FOLDERID_LocalAppDataLow, SHGetKnownFolderPath};

    let mut raw: *mut u16 = std::ptr::null_mut();
    let hr = unsafe { SHGetKnownFolderPath(&FOLDERID_LocalAppDataLow, 0, 0, &mut raw) };
    // The buffer must be freed even when the call fails.
    let buffer = CoTaskString(raw);
    if hr < 0 {
        bail!("failed to get LocalLow path (HRESULT {hr:#010x})");
    }
    let wide = buffer.as_wide();
    if wide.is_empty() {
        bail!("failed to get LocalLow path (empty path)");
    }
    Ok(PathBuf::from(OsString::from_wide(wide)))
}

#[cfg(not(windows))]
pub fn local_low_dir() -> Result<PathBuf> {
    anyhow::bail!("failed to get LocalLow path: only available on Windows")
}

#[cfg(windows)]
struct CoTaskString(*mut u16);

#[cfg(windows)]
impl CoTaskString {
    fn as_wide(&self) -> &[u16] {
        if self.0.is_null() {
            return &[];
        }
        unsafe {
            let mut len = 0;
            while *self.0.add(len) != 0 {
                len += 1;
            }
            std::slice::from_raw_parts(self.0, len)
        }
    }
}

#[cfg(windows)]
impl Drop for CoTaskString {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { windows_sys::Win32::System::Com::CoTaskMemFree(self.0.cast()) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_dir_is_rooted() {
        let root = PathBuf::from(r"C:\Users\me\AppData\LocalLow");
        assert_eq!(asset_dir(&root, "Croissound"), root.join("Croissound"));
    }

    #[test]
    fn source_root_is_current_dir() {
        assert_eq!(source_root().unwrap(), std::env::current_dir().unwrap());
    }

    #[cfg(windows)]
    #[test]
    fn local_low_dir_is_absolute() {
        let dir = local_low_dir().unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("LocalLow"));
    }

    #[cfg(not(windows))]
    #[test]
    fn local_low_dir_fails_off_windows() {
        let err = local_low_dir().unwrap_err();
        assert!(err.to_string().contains("LocalLow"));
    }
}
