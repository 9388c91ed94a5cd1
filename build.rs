use serde::Deserialize;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
struct Config {
    app_id: String,
    name: String,
    product_name: String,
    company: String,
    description: String,
    version: String,
    #[serde(default)]
    icon: String,
    asset_folder: String,
    log_dir: String,
    schemes_key: String,
    events_key: String,
    scheme_name: String,
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let manifest_dir = PathBuf::from(manifest_dir);
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let config = load_config(&manifest_dir).unwrap_or_else(|err| {
        panic!("failed to load config.toml: {err}");
    });

    if let Err(err) = validate_config(&config) {
        panic!("invalid config.toml: {err}");
    }

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        if let Err(err) = embed_resources(&manifest_dir, &config) {
            panic!("failed to embed resources: {err}");
        }
    }

    if let Err(err) = write_config_rs(&PathBuf::from(out_dir), &config) {
        panic!("failed to write config: {err}");
    }
}

fn load_config(root: &Path) -> io::Result<Config> {
    let config_path = root.join("config.toml");
    println!("cargo:rerun-if-changed={}", config_path.display());
    let contents = fs::read_to_string(&config_path)?;
    let cfg: Config = toml::from_str(&contents)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(cfg)
}

fn validate_config(config: &Config) -> io::Result<()> {
    let required = [
        ("asset_folder", &config.asset_folder),
        ("log_dir", &config.log_dir),
        ("schemes_key", &config.schemes_key),
        ("events_key", &config.events_key),
        ("scheme_name", &config.scheme_name),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{key} must not be empty"),
            ));
        }
    }
    if config.asset_folder == config.log_dir {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "log_dir must differ from asset_folder",
        ));
    }
    Ok(())
}

fn embed_resources(root: &Path, config: &Config) -> io::Result<()> {
    let mut res = winres::WindowsResource::new();
    if !config.icon.is_empty() {
        let icon_path = root.join(&config.icon);
        if icon_path.exists() {
            res.set_icon(icon_path.to_string_lossy().as_ref());
        }
    }
    if !config.product_name.is_empty() {
        res.set("ProductName", &config.product_name);
    }
    if !config.description.is_empty() {
        res.set("FileDescription", &config.description);
    }
    if !config.company.is_empty() {
        res.set("CompanyName", &config.company);
    }
    if !config.version.is_empty() {
        res.set("FileVersion", &config.version);
        res.set("ProductVersion", &config.version);
    }
    if !config.app_id.is_empty() {
        res.set("InternalName", &config.app_id);
    }
    res.compile()?;
    Ok(())
}

fn write_config_rs(out_dir: &Path, config: &Config) -> io::Result<()> {
    use std::io::Write;
    let out_path = out_dir.join("croissound_config.rs");
    let mut file = fs::File::create(&out_path)?;
    writeln!(file, "pub const NAME: &str = {:?};", config.name)?;
    writeln!(file, "pub const VERSION: &str = {:?};", config.version)?;
    writeln!(file, "pub const ASSET_FOLDER: &str = {:?};", config.asset_folder)?;
    writeln!(file, "pub const LOG_DIR: &str = {:?};", config.log_dir)?;
    writeln!(file, "pub const SCHEMES_KEY: &str = {:?};", config.schemes_key)?;
    writeln!(file, "pub const EVENTS_KEY: &str = {:?};", config.events_key)?;
    writeln!(file, "pub const SCHEME_NAME: &str = {:?};", config.scheme_name)?;
    Ok(())
}
