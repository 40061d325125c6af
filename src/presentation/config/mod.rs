mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LimitsSettings, LlmSettings, LoggingSettings, ServerSettings, Settings};
