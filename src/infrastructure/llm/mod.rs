mod openai_client;

pub use openai_client::{DEFAULT_BASE_URL, OpenAiClient};
