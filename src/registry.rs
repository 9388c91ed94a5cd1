#[cfg(windows)]
use anyhow::Context;
use anyhow::Result;

use crate::config;

/// `AppEvents\Schemes\Apps\.Default\<event>\.Current`
pub fn event_key(event: &str) -> String {
    format!("{}\\{}\\{}", config::EVENTS_KEY, event, config::SCHEME_NAME)
}

/// Sets a `REG_SZ` value under an existing `HKEY_CURRENT_USER` key. An empty
/// `name` targets the key's default value. Keys are never created.
#[cfg(windows)]
pub fn set_string_value(subkey: &str, name: &str, data: &str) -> Result<()> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(subkey, KEY_SET_VALUE)
        .with_context(|| format!("failed to open registry key {subkey}"))?;
    key.set_value(name, &data.to_string())
        .with_context(|| format!("failed to set registry value {name:?} under {subkey}"))?;
    Ok(())
}

#[cfg(not(windows))]
pub fn set_string_value(subkey: &str, _name: &str, _data: &str) -> Result<()> {
    anyhow::bail!("failed to open registry key {subkey}: registry is only available on Windows")
}

/// Names of the direct subkeys of an `HKEY_CURRENT_USER` key, in registry order.
/// An enumeration error ends the walk with the names read so far.
#[cfg(windows)]
pub fn list_subkeys(subkey: &str) -> Result<Vec<String>> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags(subkey, KEY_READ)
        .with_context(|| format!("failed to open registry key {subkey}"))?;
    Ok(key.enum_keys().map_while(|name| name.ok()).collect())
}

#[cfg(not(windows))]
pub fn list_subkeys(subkey: &str) -> Result<Vec<String>> {
    anyhow::bail!("failed to open registry key {subkey}: registry is only available on Windows")
}
