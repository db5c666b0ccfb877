//! In-memory AssistantRepository implementation.
//!
//! Stands in for the remote assistant-management service: every call waits a
//! simulated network latency, and deletes fail with a configurable
//! probability so rollback paths get exercised. Creates and updates are
//! validated here as well, so no unbalanced response length is ever stored.

use std::sync::Arc;
use std::time::Duration;

use assistants_core::assistant::{
    Assistant, AssistantPatch, AssistantRepository, NewAssistant, get_seed_assistants,
};
use assistants_core::config::ServiceConfig;
use assistants_core::error::{AssistantError, Result};
use assistants_core::outcome::OutcomeSource;
use tokio::sync::RwLock;

use crate::outcomes::ThreadRngOutcomes;

const ENTITY_NAME: &str = "assistant";

/// Mock assistant service holding its records in memory.
///
/// The collection is owned by the repository instance. Share it through an
/// `Arc` with whichever component issues mutations.
pub struct InMemoryAssistantRepository {
    assistants: RwLock<Vec<Assistant>>,
    config: ServiceConfig,
    outcomes: Arc<dyn OutcomeSource>,
}

impl InMemoryAssistantRepository {
    /// Creates a repository seeded with the default assistants.
    pub fn new(config: ServiceConfig, outcomes: Arc<dyn OutcomeSource>) -> Self {
        Self::with_assistants(get_seed_assistants(), config, outcomes)
    }

    /// Creates a repository with custom content (for testing).
    pub fn with_assistants(
        assistants: Vec<Assistant>,
        config: ServiceConfig,
        outcomes: Arc<dyn OutcomeSource>,
    ) -> Self {
        Self {
            assistants: RwLock::new(assistants),
            config,
            outcomes,
        }
    }

    /// Seeded repository drawing from the thread-local RNG.
    pub fn with_config(config: ServiceConfig) -> Self {
        Self::new(config, Arc::new(ThreadRngOutcomes))
    }

    pub async fn len(&self) -> usize {
        self.assistants.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assistants.read().await.is_empty()
    }

    /// Waits a random delay within the configured latency range.
    ///
    /// An empty range (`min == max`) does not consume a sample.
    async fn simulate_latency(&self) {
        let ServiceConfig {
            min_latency_ms,
            max_latency_ms,
            ..
        } = self.config;

        let millis = if min_latency_ms == max_latency_ms {
            min_latency_ms
        } else {
            self.outcomes.within(min_latency_ms, max_latency_ms)
        };

        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait::async_trait]
impl AssistantRepository for InMemoryAssistantRepository {
    async fn list(&self) -> Result<Vec<Assistant>> {
        self.simulate_latency().await;
        let assistants = self.assistants.read().await.clone();
        tracing::debug!(count = assistants.len(), "[assistant_service] list");
        Ok(assistants)
    }

    async fn get(&self, id: &str) -> Result<Option<Assistant>> {
        self.simulate_latency().await;
        let assistants = self.assistants.read().await;
        let found = assistants.iter().find(|a| a.id == id).cloned();
        tracing::debug!(id, found = found.is_some(), "[assistant_service] get");
        Ok(found)
    }

    async fn create(&self, request: NewAssistant) -> Result<Assistant> {
        self.simulate_latency().await;
        request.validate()?;
        let assistant = request.into_assistant();
        self.assistants.write().await.push(assistant.clone());
        tracing::debug!(id = %assistant.id, name = %assistant.name, "[assistant_service] create");
        Ok(assistant)
    }

    async fn update(&self, id: &str, patch: AssistantPatch) -> Result<Assistant> {
        self.simulate_latency().await;
        patch.validate()?;
        let mut assistants = self.assistants.write().await;
        let assistant = assistants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AssistantError::not_found(ENTITY_NAME, id))?;

        patch.apply_to(assistant);
        tracing::debug!(id, "[assistant_service] update");
        Ok(assistant.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.simulate_latency().await;

        if self.outcomes.occurs(self.config.delete_failure_rate) {
            tracing::debug!(id, "[assistant_service] delete failed (injected)");
            return Err(AssistantError::transient(
                "Failed to delete the assistant. Please try again.",
            ));
        }

        let mut assistants = self.assistants.write().await;
        let before = assistants.len();
        assistants.retain(|a| a.id != id);
        tracing::debug!(
            id,
            removed = before != assistants.len(),
            "[assistant_service] delete"
        );
        Ok(())
    }

    async fn update_rules(&self, id: &str, rules: String) -> Result<Assistant> {
        self.simulate_latency().await;
        let mut assistants = self.assistants.write().await;
        let assistant = assistants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AssistantError::not_found(ENTITY_NAME, id))?;

        assistant.rules = rules;
        tracing::debug!(id, "[assistant_service] update_rules");
        Ok(assistant.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistants_core::assistant::{Language, ResponseLength, Tone};
    use assistants_core::outcome::{FixedOutcome, ScriptedOutcomes};

    fn instant_repo() -> InMemoryAssistantRepository {
        InMemoryAssistantRepository::new(ServiceConfig::instant(), Arc::new(FixedOutcome::NEVER))
    }

    fn new_request(name: &str) -> NewAssistant {
        NewAssistant {
            name: name.to_string(),
            language: Language::Portuguese,
            tone: Tone::Formal,
            response_length: ResponseLength::new(10, 20, 70),
            audio_enabled: false,
            rules: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_returns_seeds() {
        let repo = instant_repo();
        let assistants = repo.list().await.unwrap();
        let ids: Vec<&str> = assistants.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_get_unknown_returns_none() {
        let repo = instant_repo();
        assert!(repo.get("404").await.unwrap().is_none());
        assert_eq!(repo.get("2").await.unwrap().unwrap().name, "Technical Support");
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = instant_repo();
        let first = repo.create(new_request("First")).await.unwrap();
        let second = repo.create(new_request("Second")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 5);
        assert_eq!(repo.get(&first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let repo = instant_repo();
        let updated = repo
            .update("1", AssistantPatch::name("Ventas Plus"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Ventas Plus");
        assert_eq!(updated.language, Language::Spanish);
        assert_eq!(repo.get("1").await.unwrap().unwrap().name, "Ventas Plus");
    }

    #[tokio::test]
    async fn test_unbalanced_response_length_is_never_stored() {
        let repo = instant_repo();

        let request = NewAssistant {
            response_length: ResponseLength::new(50, 50, 50),
            ..new_request("Lopsided")
        };
        let err = repo.create(request).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.len().await, 3);

        let patch = AssistantPatch {
            response_length: Some(ResponseLength::new(10, 10, 10)),
            ..AssistantPatch::default()
        };
        let err = repo.update("2", patch).await.unwrap_err();
        assert!(err.is_validation());
        assert!(repo.get("2").await.unwrap().unwrap().response_length.is_balanced());
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = instant_repo();
        let err = repo
            .update("404", AssistantPatch::name("Nobody"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_rules() {
        let repo = instant_repo();
        let updated = repo
            .update_rules("3", "Seja breve.".to_string())
            .await
            .unwrap();
        assert_eq!(updated.rules, "Seja breve.");

        let err = repo.update_rules("404", String::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = instant_repo();
        repo.delete("2").await.unwrap();
        assert!(repo.get("2").await.unwrap().is_none());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_noop() {
        let repo = instant_repo();
        repo.delete("404").await.unwrap();
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_record() {
        let config = ServiceConfig {
            delete_failure_rate: 0.1,
            ..ServiceConfig::instant()
        };
        // First delete draws 0.05 (< 0.1, fails), second draws 0.5 (succeeds).
        let outcomes = Arc::new(ScriptedOutcomes::new([0.05, 0.5], 0.5));
        let repo = InMemoryAssistantRepository::new(config, outcomes);

        let err = repo.delete("1").await.unwrap_err();
        assert!(err.is_transient());
        assert!(repo.get("1").await.unwrap().is_some());

        repo.delete("1").await.unwrap();
        assert!(repo.get("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let config = ServiceConfig {
            min_latency_ms: 20,
            max_latency_ms: 40,
            delete_failure_rate: 0.0,
        };
        let repo = InMemoryAssistantRepository::new(config, Arc::new(FixedOutcome(0.0)));

        let started = std::time::Instant::now();
        repo.list().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
