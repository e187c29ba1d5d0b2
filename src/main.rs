use std::path::PathBuf;

use shell_core::AppConfig;

use appshell::bootstrap::{load_config, logging, run_app};

const CONFIG_FILE: &str = "appshell.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config_path = PathBuf::from(CONFIG_FILE);
    let config = if config_path.exists() {
        load_config(config_path)?
    } else {
        tracing::info!("No {CONFIG_FILE} found, using shipped defaults");
        AppConfig::with_shipped_defaults()
    };

    let _runtime = run_app(config).await?;

    // MOUNTED is terminal; the shell lives until the process does.
    tracing::info!("Shell mounted, press Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;

    Ok(())
}
