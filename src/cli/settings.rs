use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct SettingsArgs {
    /// Settings file that keeps the inputs between runs.
    #[clap(long = "settings", env = "STROMVALG_SETTINGS", default_value = "stromvalg.toml")]
    pub path: PathBuf,
}
