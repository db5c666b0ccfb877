//! Assistant repository trait.
//!
//! Defines the boundary to the assistant-management service.

use super::model::Assistant;
use super::request::{AssistantPatch, NewAssistant};
use crate::error::Result;

/// An abstract repository for managing assistants.
///
/// This trait is the whole contract the console consumes from its backend.
/// The in-memory mock implements it today; a remote service can replace it
/// without touching the allocator or the mutation coordinator.
///
/// # Implementation Notes
///
/// No record-level locking is expected: overlapping mutations on the same id
/// resolve last-write-wins.
#[async_trait::async_trait]
pub trait AssistantRepository: Send + Sync {
    /// Retrieves all assistants.
    async fn list(&self) -> Result<Vec<Assistant>>;

    /// Retrieves a single assistant, `Ok(None)` when the id is unknown.
    async fn get(&self, id: &str) -> Result<Option<Assistant>>;

    /// Stores a new assistant and returns it with its assigned id.
    ///
    /// Implementations reject a request that fails `NewAssistant::validate`
    /// with `AssistantError::Validation`.
    async fn create(&self, request: NewAssistant) -> Result<Assistant>;

    /// Merges `patch` into the assistant with the given id.
    ///
    /// # Returns
    ///
    /// - `Ok(Assistant)`: The assistant after the update
    /// - `Err(AssistantError::Validation)`: The patch fails `AssistantPatch::validate`
    /// - `Err(AssistantError::NotFound)`: No assistant with that id
    async fn update(&self, id: &str, patch: AssistantPatch) -> Result<Assistant>;

    /// Removes the assistant with the given id.
    ///
    /// May fail with `AssistantError::Transient` even when the id exists.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Replaces the training rules of an assistant.
    ///
    /// # Returns
    ///
    /// - `Ok(Assistant)`: The assistant after the update
    /// - `Err(AssistantError::NotFound)`: No assistant with that id
    async fn update_rules(&self, id: &str, rules: String) -> Result<Assistant>;
}
