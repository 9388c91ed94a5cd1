mod config;
mod fs_ops;
mod installer;
mod logging;
mod paths;
mod registry;
mod sounds;

use anyhow::Result;

fn main() -> Result<()> {
    let local_low = paths::local_low_dir()?;
    let log_path = match logging::init(&local_low) {
        Ok(path) => Some(path),
        Err(err) => {
            logging::warn(None, &format!("log file unavailable: {err:#}"));
            None
        }
    };
    let report = installer::run(&local_low, log_path.as_deref())?;
    logging::info(log_path.as_deref(), &report.summary());
    Ok(())
}
