use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use clap::Parser;
use config::{builder::DefaultState, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};

const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_REPORT_MODEL: &str = "gemini-3-pro-preview";
const DEFAULT_INSIGHT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1";
const DEFAULT_OLLAMA_PORT: u16 = 11434;
const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable consulted when the configuration file carries no
/// API key.
pub(crate) const API_KEY_VAR: &str = "API_KEY";

#[derive(Parser, Debug)]
#[command(version)]
pub(crate) struct Args {
    /// Path to the local configuration TOML file.
    #[arg(short, value_name = "CONFIG_PATH")]
    pub(crate) config: PathBuf,

    /// Path to the certificate file. Serves over TLS together with `--key`.
    #[arg(long, value_name = "CERT_PATH", requires = "key")]
    pub(crate) cert: Option<PathBuf>,

    /// Path to the key file.
    #[arg(long, value_name = "KEY_PATH", requires = "cert")]
    pub(crate) key: Option<PathBuf>,
}

impl Args {
    /// Certificate and key paths, when both were given.
    pub(crate) fn tls(&self) -> Option<(&Path, &Path)> {
        self.cert.as_deref().zip(self.key.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Web {
    #[serde(deserialize_with = "deserialize_socket_addr")]
    pub(crate) address: SocketAddr,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Log {
    /// One of `trace`, `debug`, `info`, `warn` or `error`.
    pub(crate) level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Provider {
    Gemini,
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AdvisorSettings {
    pub(crate) provider: Provider,
    pub(crate) api_key: Option<String>,
    pub(crate) endpoint: String,
    pub(crate) report_model: String,
    pub(crate) insight_model: String,
    pub(crate) ollama_host: String,
    pub(crate) ollama_port: u16,
    pub(crate) ollama_model: String,
    pub(crate) timeout_secs: u64,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            provider: Provider::Gemini,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            report_model: DEFAULT_REPORT_MODEL.to_string(),
            insight_model: DEFAULT_INSIGHT_MODEL.to_string(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            ollama_port: DEFAULT_OLLAMA_PORT,
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub(crate) web: Web,
    pub(crate) log: Log,
    pub(crate) advisor: AdvisorSettings,
}

impl Settings {
    /// Load settings from the given TOML file, with sane defaults.
    pub(crate) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let builder = ConfigBuilder::<DefaultState>::default()
            .set_default("web.address", DEFAULT_ADDR)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .set_default("advisor.provider", "gemini")?
            .set_default("advisor.endpoint", DEFAULT_ENDPOINT)?
            .set_default("advisor.report_model", DEFAULT_REPORT_MODEL)?
            .set_default("advisor.insight_model", DEFAULT_INSIGHT_MODEL)?
            .set_default("advisor.ollama_host", DEFAULT_OLLAMA_HOST)?
            .set_default("advisor.ollama_port", i64::from(DEFAULT_OLLAMA_PORT))?
            .set_default("advisor.ollama_model", DEFAULT_OLLAMA_MODEL)?
            .set_default("advisor.timeout_secs", DEFAULT_TIMEOUT_SECS)?;

        let cfg = builder.add_source(File::from(path)).build()?;

        cfg.try_deserialize()
    }

    /// Fills in the API key from `env_key` if the file did not set one.
    pub(crate) fn with_api_key_fallback(mut self, env_key: Option<String>) -> Self {
        if self.advisor.api_key.as_deref().is_none_or(str::is_empty) {
            self.advisor.api_key = env_key.filter(|key| !key.is_empty());
        }
        self
    }
}

fn deserialize_socket_addr<'de, D>(deserializer: D) -> Result<SocketAddr, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}
