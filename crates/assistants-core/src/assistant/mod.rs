//! Assistant domain module.
//!
//! # Module Structure
//!
//! - `model`: `Assistant`, `Language`, `Tone`, `ResponseLength`
//! - `allocation`: linked percentage sliders for `ResponseLength`
//! - `request`: creation/update requests and their validation
//! - `repository`: repository trait for the assistant service
//! - `preset`: seed assistants

pub mod allocation;
mod model;
mod preset;
mod repository;
pub mod request;

// Re-export public API
pub use allocation::{LengthField, allocate};
pub use model::{Assistant, Language, ResponseLength, Tone};
pub use preset::get_seed_assistants;
pub use repository::AssistantRepository;
pub use request::{AssistantPatch, NewAssistant};
