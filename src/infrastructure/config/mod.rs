use serde::Deserialize;
use std::env;

/// Runtime configuration for the backend adapters, loaded from the
/// environment. The library itself never reads env vars outside of
/// [`Config::from_env`]; embedders may also build a `Config` by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the managed backend (storage + edge functions).
    pub backend_url: String,
    /// API key sent as both bearer token and `apikey` header.
    pub api_key: String,
    /// Edge function that performs speech synthesis.
    pub synthesis_function: String,
    /// Voice used when content does not specify one.
    pub default_voice_id: String,
    /// Cache-control max-age applied to stored audio objects.
    pub cache_control_secs: u32,
    /// In-process memory layer in front of remote cache downloads.
    pub memory_cache_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            backend_url: env::var("BACKEND_URL")?,
            api_key: env::var("BACKEND_API_KEY")?,
            synthesis_function: env::var("SYNTHESIS_FUNCTION")
                .unwrap_or_else(|_| "elevenlabs-tts".to_string()),
            default_voice_id: env::var("DEFAULT_VOICE_ID")
                .unwrap_or_else(|_| "21m00Tcm4TlvDq8ikWAM".to_string()),
            cache_control_secs: env::var("AUDIO_CACHE_CONTROL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,
            memory_cache_enabled: env::var("AUDIO_MEMORY_CACHE_ENABLED")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
        };

        Ok(config)
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
