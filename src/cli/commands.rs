use std::path::PathBuf;

use clap::Parser;

use crate::model::config::Config;

#[derive(Parser, Debug)]
#[command(name = "checklist", about = concat!("[\u{2713}] checklist v", env!("CARGO_PKG_VERSION"), " - group, number and tick off tasks"), version)]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "checklist=trace"
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Header bar title
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if let Some(title) = &self.title {
            config.ui.title = title.clone();
        }
    }
}
