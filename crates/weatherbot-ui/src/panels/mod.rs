pub mod chat;
pub mod closed;
