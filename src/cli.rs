//! Command-line definition and overrides.

use camino::Utf8PathBuf;
use clap::Parser;
use modlist_html::config::DEFAULT_CONFIG_FILE;
use modlist_html::{Game, InstanceLayout, RunConfig};

/// Render a Mod Organizer 2 load order as a linked HTML mod list.
///
/// Settings come from the config file, then `MODLIST_*` environment
/// variables, then these flags.
#[derive(Parser, Debug)]
#[command(name = "modlist-html", version, about, long_about = None)]
pub struct Cli {
    /// YAML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: Utf8PathBuf,

    /// Storage location holding the modlist instances
    #[arg(long)]
    pub base_dir: Option<Utf8PathBuf>,

    #[arg(long, value_enum)]
    pub layout: Option<InstanceLayout>,

    #[arg(long, value_enum)]
    pub game: Option<Game>,

    #[arg(long)]
    pub modlist: Option<String>,

    #[arg(long)]
    pub profile: Option<String>,

    /// Version label shown in the page title
    #[arg(long = "list-version")]
    pub list_version: Option<String>,

    #[arg(long)]
    pub output_dir: Option<Utf8PathBuf>,

    /// Log directory (defaults to the output directory)
    #[arg(long)]
    pub log_dir: Option<Utf8PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log to the log file
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the log file as JSON lines
    #[arg(long)]
    pub json_log: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<Utf8PathBuf>,
}

impl Cli {
    /// Apply flag overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(game) = self.game {
            config.game = game;
        }
        if let Some(modlist) = &self.modlist {
            config.modlist = modlist.clone();
        }
        if let Some(profile) = &self.profile {
            config.profile = profile.clone();
        }
        if let Some(version) = &self.list_version {
            config.version = version.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if self.verbose {
            config.debug = true;
        }
    }
}
