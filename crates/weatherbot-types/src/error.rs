use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum WidgetError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}")]
    Api { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}
