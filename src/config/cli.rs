use crate::config::toml_config::TomlConfig;
use crate::config::ServiceSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cafe-service")]
#[command(about = "HTTP service that lists cafés by city")]
pub struct CliConfig {
    /// Address to listen on [default: 127.0.0.1:8080]
    #[arg(long, env = "CAFE_LISTEN")]
    pub listen: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Validate configuration, print the dataset summary and exit
    #[arg(long)]
    pub check: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    pub fn settings(&self, file: Option<&TomlConfig>) -> Result<ServiceSettings> {
        ServiceSettings::resolve(self.listen.as_deref(), file)
    }

    pub fn json_logs(&self, file: Option<&TomlConfig>) -> bool {
        self.json_logs || file.is_some_and(TomlConfig::json_logs)
    }
}
