//! Settings structures for Sahayak configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main settings structure matching `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub translator: TranslatorSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SAHAYAK_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SAHAYAK_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("SAHAYAK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SAHAYAK_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SAHAYAK_DATABASE") {
            self.database.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("SAHAYAK_LLM_ENDPOINT") {
            self.llm.endpoint = val;
        }
        if let Ok(val) = std::env::var("SAHAYAK_LLM_MODEL") {
            self.llm.model = val;
        }
        // GROQ_API_KEY takes precedence over SAHAYAK_LLM_API_KEY
        if let Ok(val) = std::env::var("SAHAYAK_LLM_API_KEY") {
            self.llm.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("GROQ_API_KEY") {
            if !val.is_empty() {
                self.llm.api_key = Some(val);
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in the page title
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Sahayak".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Internship database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite file
    pub path: PathBuf,
    /// Row limit the model is asked to respect when the question names none
    pub top_k: usize,
    /// Sample rows shown per table in the generation prompt
    pub sample_rows: usize,
    /// Longest sample value shown in the generation prompt, in characters
    pub sample_value_chars: usize,
    /// Longest result value shown in the answer prompt, in characters
    pub result_value_chars: usize,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("internship.db"),
            top_k: 5,
            sample_rows: 3,
            sample_value_chars: 100,
            result_value_chars: 300,
        }
    }
}

/// Language model settings (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Base URL, `/chat/completions` is appended
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Bearer token
    pub api_key: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            api_key: None,
            temperature: 0.0,
        }
    }
}

/// Translation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorSettings {
    /// Google translate endpoint
    pub endpoint: String,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            pool_maxsize: 10,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
