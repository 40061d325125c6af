use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_PERSONA, ExtractionLimits, FieldLimits};
use crate::infrastructure::llm::DEFAULT_BASE_URL;
use crate::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub limits: LimitsSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    pub persona: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
            request_timeout_secs: 60,
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsSettings {
    pub max_upload_mb: u64,
    pub max_pages: usize,
    pub max_text_chars: usize,
    pub parse_timeout_secs: u64,
    pub max_hints_len: usize,
    pub max_question_len: usize,
    pub max_contact_message_len: usize,
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_upload_mb: 20,
            max_pages: 200,
            max_text_chars: 5_000_000,
            parse_timeout_secs: 10,
            max_hints_len: 500,
            max_question_len: 1000,
            max_contact_message_len: 500,
        }
    }
}

impl LimitsSettings {
    pub fn extraction_limits(&self) -> ExtractionLimits {
        ExtractionLimits::new(
            self.max_upload_mb,
            self.max_pages,
            self.max_text_chars,
            Duration::from_secs(self.parse_timeout_secs),
        )
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            hints: self.max_hints_len,
            question: self.max_question_len,
            contact_message: self.max_contact_message_len,
        }
    }
}

impl Settings {
    /// Reads `APP_ENVIRONMENT`, then layers `appsettings.{env}` (optional)
    /// under `APP_`-prefixed environment variables, e.g.
    /// `APP_LIMITS__MAX_UPLOAD_MB=5`.
    pub fn load() -> Result<(Environment, Self), ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            settings.llm.api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        }

        Ok((environment, settings))
    }

    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            json_format: self.logging.json || TracingConfig::default().json_format,
            default_filter: self.logging.level.clone(),
        }
    }
}
