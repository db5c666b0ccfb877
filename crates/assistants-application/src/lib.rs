//! Application layer for the assistant console.
//!
//! This crate coordinates the domain and infrastructure layers: the
//! optimistic mutation coordinator, the session-scoped console state and the
//! simulated training chat.

pub mod bootstrap;
pub mod chat_simulator;
pub mod console_state;
pub mod mutation_coordinator;
pub mod mutation_status;
pub mod query_cache;
pub mod telemetry;

pub use bootstrap::Console;
pub use chat_simulator::ChatSimulator;
pub use console_state::{ConsoleState, ModalMode, ModalStep};
pub use mutation_coordinator::MutationCoordinator;
pub use mutation_status::{MutationKind, MutationStatus};
pub use query_cache::AssistantQueryCache;
pub use telemetry::init_tracing;
