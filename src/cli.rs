use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Terminal storefront demo", version, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
    }
}
