use serde::{Deserialize, Serialize};

/// Widget configuration.
///
/// `api_base` prefixes the summary endpoint only; the chat endpoint is
/// always same-origin relative, matching the deployed reverse-proxy setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL for the summary endpoint. Empty means same origin.
    pub api_base: String,
    /// First bot message shown in a fresh session
    pub greeting: String,
    /// Title shown in the chat header
    pub title: String,
}

pub const DEFAULT_GREETING: &str =
    "Hello! Ask me about the weather or upload a PDF to chat about climate documents.";

pub const DEFAULT_TITLE: &str = "Weather Intelligence Bot";

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            greeting: DEFAULT_GREETING.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build-time override of the API base URL, set when compiling for an
    /// environment where the summary service lives on another origin.
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("WEATHERBOT_API_URL").unwrap_or("").to_string(),
            ..Self::default()
        }
    }
}
