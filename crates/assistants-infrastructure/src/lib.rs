pub mod config_service;
pub mod in_memory_assistant_repository;
pub mod outcomes;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_assistant_repository::InMemoryAssistantRepository;
pub use crate::outcomes::{SeededOutcomes, ThreadRngOutcomes};
pub use crate::paths::ConsolePaths;
