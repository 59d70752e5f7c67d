pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::{LogFormat, TomlConfig};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 命令列參數；有給的值會覆蓋 TOML 設定
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "roman-api")]
#[command(about = "HTTP API converting between Roman and Arabic numerals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served for paths outside /api
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(long)]
    pub max_batch_size: Option<usize>,

    #[arg(long, value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }
        if let Some(size) = self.max_batch_size {
            config.limits.max_batch_size = size;
        }
        if !self.allowed_origins.is_empty() {
            config.cors.allowed_origins = self.allowed_origins.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
    }

    /// 讀取設定檔（若有指定）後套用命令列覆蓋
    pub fn resolve(&self) -> crate::utils::error::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }
}
