pub mod assistant;
pub mod chat;
pub mod config;
pub mod error;
pub mod outcome;

// Re-export common error type
pub use error::AssistantError;
