//! modlist-html - Render a Mod Organizer 2 load order as a linked HTML mod list
//!
//! # Execution Flow
//!
//! 1. Parse the command line
//! 2. Load `modlist-html.yaml` (optional) and `MODLIST_*` overrides, then apply flags
//! 3. Initialize logging → `{log_dir}/modlist_to_html.log.YYYY-MM-DD` + console
//! 4. Run the pipeline: `modlist.txt` → `meta.ini` lookups → HTML → `mods_{modlist} ({profile}).html`
//!
//! A missing load order or an unwritable output ends the process with a
//! non-zero exit code after logging the error.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use modlist_html::logging::{LoggingOptions, setup_logging};
use modlist_html::{APP_NAME, ConfigManager, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::new(&cli.config).load_run_config()?;
    cli.apply(&mut config);

    if let Some(path) = &cli.init_config {
        ConfigManager::new(path).save_run_config(&config)?;
        println!("Wrote configuration to {}", path);
        return Ok(());
    }

    let mut logging = LoggingOptions::new(config.effective_log_dir());
    logging.debug = config.debug;
    logging.console = !cli.quiet;
    logging.json = cli.json_log;

    // Held until exit so the non-blocking writer flushes
    let _guard = setup_logging(&logging)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    if cli.config.exists() {
        tracing::info!("Loaded run config from {}", cli.config);
    } else {
        tracing::info!("Run config file not found at {}, using defaults", cli.config);
    }
    tracing::debug!("Run config: {:?}", config);

    let summary = modlist_html::run(&config)?;

    tracing::info!("Finished: {}", summary.summary());
    Ok(())
}
