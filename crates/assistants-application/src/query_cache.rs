use std::collections::HashMap;

use assistants_core::AssistantError;
use assistants_core::assistant::Assistant;
use tokio::sync::RwLock;

/// Client-side cache of assistant queries.
///
/// Holds the assistant list (what the console renders) and individually
/// fetched assistants, keyed by id. `None` for the list means it has never
/// been loaded.
#[derive(Default)]
pub struct AssistantQueryCache {
    list: RwLock<Option<Vec<Assistant>>>,
    details: RwLock<HashMap<String, Assistant>>,
    last_sync_error: RwLock<Option<AssistantError>>,
}

impl AssistantQueryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached list.
    pub async fn list(&self) -> Option<Vec<Assistant>> {
        self.list.read().await.clone()
    }

    /// Replaces the cached list, e.g. with a snapshot taken before a mutation.
    pub async fn set_list(&self, assistants: Option<Vec<Assistant>>) {
        *self.list.write().await = assistants;
    }

    /// Edits the cached list in place. Does nothing when it was never loaded.
    pub async fn modify_list<F>(&self, edit: F)
    where
        F: FnOnce(&mut Vec<Assistant>),
    {
        if let Some(assistants) = self.list.write().await.as_mut() {
            edit(assistants);
        }
    }

    /// Gets a cached assistant by id.
    pub async fn detail(&self, id: &str) -> Option<Assistant> {
        self.details.read().await.get(id).cloned()
    }

    pub async fn insert_detail(&self, assistant: Assistant) {
        self.details
            .write()
            .await
            .insert(assistant.id.clone(), assistant);
    }

    /// Drops one cached assistant so the next lookup hits the repository.
    pub async fn invalidate_detail(&self, id: &str) {
        self.details.write().await.remove(id);
    }

    /// Drops every cached assistant.
    pub async fn invalidate_details(&self) {
        self.details.write().await.clear();
    }

    pub async fn last_sync_error(&self) -> Option<AssistantError> {
        self.last_sync_error.read().await.clone()
    }

    pub async fn set_sync_error(&self, error: Option<AssistantError>) {
        *self.last_sync_error.write().await = error;
    }
}
