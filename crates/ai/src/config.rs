/// Completion API configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL; requests go to `{api_url}/chat/completions`.
    pub api_url: String,
    /// Bearer token. Trail generation is disabled when unset.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
}

impl AiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `AI_API_URL`      | `https://api.openai.com/v1` |
    /// | `AI_API_KEY`      | unset (generation disabled) |
    /// | `AI_MODEL`        | `gpt-4o-mini`               |
    /// | `AI_TIMEOUT_SECS` | `60`                        |
    /// | `AI_TEMPERATURE`  | `0.7`                       |
    pub fn from_env() -> Self {
        let api_url = std::env::var("AI_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into())
            .trim_end_matches('/')
            .to_string();

        let api_key = std::env::var("AI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let model = std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

        let timeout_secs: u64 = std::env::var("AI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("AI_TIMEOUT_SECS must be a valid u64");

        let temperature: f32 = std::env::var("AI_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".into())
            .parse()
            .expect("AI_TEMPERATURE must be a number");

        Self {
            api_url,
            api_key,
            model,
            timeout_secs,
            temperature,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
