//! Mutation coordinator.
//!
//! Presents every repository mutation against the cached assistant list:
//!
//! - `update` and `delete` are optimistic: the cache changes first, the
//!   pre-mutation snapshot is restored verbatim on failure, and the list is
//!   resynchronized from the repository once the call settles, whatever the
//!   outcome;
//! - `create` and `update_rules` only touch the cache after the repository
//!   confirms.
//!
//! Nothing is cancelled or serialized here. Overlapping mutations resolve in
//! the repository (last write wins) and the final resync reconciles the cache.

use std::sync::Arc;

use assistants_core::assistant::{Assistant, AssistantPatch, AssistantRepository, NewAssistant};
use assistants_core::error::{AssistantError, Result};
use tokio::sync::watch;

use crate::console_state::ConsoleState;
use crate::mutation_status::{MutationKind, MutationStatus, MutationTracker};
use crate::query_cache::AssistantQueryCache;

pub struct MutationCoordinator {
    repository: Arc<dyn AssistantRepository>,
    cache: AssistantQueryCache,
    state: Arc<ConsoleState>,
    status: MutationTracker,
}

impl MutationCoordinator {
    pub fn new(repository: Arc<dyn AssistantRepository>, state: Arc<ConsoleState>) -> Self {
        Self {
            repository,
            cache: AssistantQueryCache::new(),
            state,
            status: MutationTracker::new(),
        }
    }

    pub fn state(&self) -> &Arc<ConsoleState> {
        &self.state
    }

    // ============================================================================
    // Status
    // ============================================================================

    pub fn subscribe(&self, kind: MutationKind) -> watch::Receiver<MutationStatus> {
        self.status.subscribe(kind)
    }

    pub fn status(&self, kind: MutationKind) -> MutationStatus {
        self.status.status(kind)
    }

    /// Error of the last failed resynchronization, cleared by the next success.
    pub async fn last_sync_error(&self) -> Option<AssistantError> {
        self.cache.last_sync_error().await
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Cached assistant list, `None` until the first refresh.
    pub async fn assistants(&self) -> Option<Vec<Assistant>> {
        self.cache.list().await
    }

    /// Reloads the list from the repository and drops cached details.
    pub async fn refresh(&self) -> Result<Vec<Assistant>> {
        let assistants = self.repository.list().await?;
        self.cache.set_list(Some(assistants.clone())).await;
        self.cache.invalidate_details().await;
        self.cache.set_sync_error(None).await;
        Ok(assistants)
    }

    /// Looks up one assistant, hitting the repository on a cache miss.
    pub async fn assistant(&self, id: &str) -> Result<Option<Assistant>> {
        if let Some(cached) = self.cache.detail(id).await {
            return Ok(Some(cached));
        }

        let found = self.repository.get(id).await?;
        if let Some(assistant) = &found {
            self.cache.insert_detail(assistant.clone()).await;
        }
        Ok(found)
    }

    /// Refresh after a mutation settled. Cached details are dropped even when
    /// the reload fails. Failures are recorded, never raised, so they cannot
    /// mask the outcome of the mutation itself.
    async fn resync(&self) {
        self.cache.invalidate_details().await;
        if let Err(e) = self.refresh().await {
            tracing::warn!("[MutationCoordinator] Resynchronization failed: {}", e);
            self.cache.set_sync_error(Some(e)).await;
        }
    }

    fn reject(&self, kind: MutationKind, err: AssistantError) -> AssistantError {
        tracing::debug!(%kind, "[MutationCoordinator] Rejected before dispatch: {}", err);
        self.status.set(kind, MutationStatus::Failed(err.clone()));
        err
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Creates an assistant.
    ///
    /// The new assistant is merged into the cache only after the repository
    /// confirms; the list is then resynchronized and the modal closed.
    pub async fn create(&self, request: NewAssistant) -> Result<Assistant> {
        let kind = MutationKind::Create;
        if let Err(e) = request.validate() {
            return Err(self.reject(kind, e));
        }

        self.status.set(kind, MutationStatus::Pending);
        let result = self.repository.create(request).await;

        match &result {
            Ok(created) => {
                tracing::info!(id = %created.id, "[MutationCoordinator] Assistant created");
                let created = created.clone();
                self.cache.modify_list(|list| list.push(created)).await;
                self.resync().await;
                self.state.close_modal();
            }
            Err(e) => tracing::warn!("[MutationCoordinator] Create failed: {}", e),
        }

        self.status.settle(kind, &result, |a| Some(a.clone()));
        result
    }

    /// Optimistically updates an assistant.
    ///
    /// # Returns
    ///
    /// - `Ok(Assistant)`: The assistant as stored by the repository
    /// - `Err(AssistantError::Validation)`: Rejected before any change
    /// - `Err(_)`: Repository error; the cache was rolled back
    pub async fn update(&self, id: &str, patch: AssistantPatch) -> Result<Assistant> {
        let kind = MutationKind::Update;
        if let Err(e) = patch.validate() {
            return Err(self.reject(kind, e));
        }

        self.status.set(kind, MutationStatus::Pending);

        let snapshot = self.cache.list().await;
        self.cache
            .modify_list(|list| {
                if let Some(assistant) = list.iter_mut().find(|a| a.id == id) {
                    patch.apply_to(assistant);
                }
            })
            .await;

        let result = self.repository.update(id, patch).await;

        match &result {
            Ok(_) => tracing::info!(id, "[MutationCoordinator] Assistant updated"),
            Err(e) => {
                tracing::warn!(id, "[MutationCoordinator] Update failed, rolling back: {}", e);
                self.cache.set_list(snapshot).await;
            }
        }

        self.resync().await;
        self.state.close_modal();

        self.status.settle(kind, &result, |a| Some(a.clone()));
        result
    }

    /// Optimistically deletes an assistant.
    ///
    /// On failure the assistant reappears in the cache from the snapshot.
    /// The pending delete target is cleared either way.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let kind = MutationKind::Delete;
        self.status.set(kind, MutationStatus::Pending);

        let snapshot = self.cache.list().await;
        self.cache.modify_list(|list| list.retain(|a| a.id != id)).await;

        let result = self.repository.delete(id).await;

        match &result {
            Ok(()) => tracing::info!(id, "[MutationCoordinator] Assistant deleted"),
            Err(e) => {
                tracing::warn!(id, "[MutationCoordinator] Delete failed, rolling back: {}", e);
                self.cache.set_list(snapshot).await;
            }
        }

        self.resync().await;
        self.state.set_assistant_to_delete(None);

        self.status.settle(kind, &result, |_| None);
        result
    }

    /// Replaces the training rules of an assistant.
    ///
    /// On success the returned assistant replaces the cached entry and the
    /// cached detail for that id is invalidated.
    pub async fn update_rules(&self, id: &str, rules: String) -> Result<Assistant> {
        let kind = MutationKind::UpdateRules;
        self.status.set(kind, MutationStatus::Pending);

        let result = self.repository.update_rules(id, rules).await;

        match &result {
            Ok(updated) => {
                tracing::info!(id, "[MutationCoordinator] Rules updated");
                let updated = updated.clone();
                self.cache
                    .modify_list(|list| {
                        if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                            *slot = updated;
                        }
                    })
                    .await;
                self.cache.invalidate_detail(id).await;
            }
            Err(e) => tracing::warn!(id, "[MutationCoordinator] Rules update failed: {}", e),
        }

        self.status.settle(kind, &result, |a| Some(a.clone()));
        result
    }
}
