//! UI-level state that drives rendering.
//!
//! The conversation itself lives in `weatherbot_core::session::ChatSession`;
//! this only holds what belongs to the widgets, currently the input field.

pub struct UiState {
    /// Input field content
    pub input_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
        }
    }

    /// Take the trimmed input for submission, clearing the field.
    /// Returns `None` when the field trims empty (field left untouched).
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input_text.clear();
        Some(text)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
