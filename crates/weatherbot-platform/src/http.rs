//! HTTP backend adapter.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. The chat
//! endpoint is always same-origin relative; the summary endpoint honours
//! the configured base URL so the summary service can live on another
//! origin behind CORS.

use async_trait::async_trait;
use gloo_net::http::Request;

use weatherbot_core::ports::BackendPort;
use weatherbot_types::{
    config::WidgetConfig,
    message::Message,
    wire::{ChatQuery, ChatReply, SummaryRequest},
    Result, WidgetError,
};

const CHAT_ENDPOINT: &str = "/api/chat";
const SUMMARY_PATH: &str = "/api/summary";

pub struct HttpBackend {
    api_base: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn summary_url(&self) -> String {
        format!("{}{}", self.api_base, SUMMARY_PATH)
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn send_chat(&self, query: &str) -> Result<String> {
        let body = ChatQuery {
            query: query.to_string(),
        };

        let response = Request::post(CHAT_ENDPOINT)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| WidgetError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(WidgetError::Api {
                status: response.status(),
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;

        Ok(reply.response)
    }

    async fn post_summary(&self, messages: &[Message]) -> Result<()> {
        let body = SummaryRequest {
            messages: messages.to_vec(),
        };
        let url = self.summary_url();
        log::info!("Posting {} messages to {}", body.messages.len(), url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| WidgetError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(WidgetError::Api {
                status: response.status(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(api_base: &str) -> WidgetConfig {
        WidgetConfig {
            api_base: api_base.to_string(),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_summary_url_same_origin_by_default() {
        let backend = HttpBackend::new(&WidgetConfig::default());
        assert_eq!(backend.summary_url(), "/api/summary");
    }

    #[test]
    fn test_summary_url_honours_api_base() {
        let backend = HttpBackend::new(&config_with_base("https://api.example.com"));
        assert_eq!(backend.summary_url(), "https://api.example.com/api/summary");
    }

    #[test]
    fn test_summary_url_strips_trailing_slash() {
        let backend = HttpBackend::new(&config_with_base("https://api.example.com/"));
        assert_eq!(backend.summary_url(), "https://api.example.com/api/summary");
    }
}
