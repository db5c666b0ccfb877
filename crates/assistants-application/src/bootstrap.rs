//! Wiring of the console services.

use std::sync::Arc;

use assistants_core::assistant::AssistantRepository;
use assistants_core::config::ConsoleConfig;
use assistants_core::error::Result;
use assistants_core::outcome::OutcomeSource;
use assistants_infrastructure::{ConfigService, InMemoryAssistantRepository, ThreadRngOutcomes};

use crate::chat_simulator::ChatSimulator;
use crate::console_state::ConsoleState;
use crate::mutation_coordinator::MutationCoordinator;
use crate::telemetry;

/// Everything the console shell needs, constructed once per session.
pub struct Console {
    pub config: ConsoleConfig,
    pub repository: Arc<dyn AssistantRepository>,
    pub state: Arc<ConsoleState>,
    pub coordinator: Arc<MutationCoordinator>,
    pub chat: Arc<ChatSimulator>,
}

impl Console {
    /// Loads the configuration, installs tracing and builds the services on
    /// top of the seeded in-memory assistant service.
    pub fn bootstrap(config_service: &ConfigService) -> Result<Self> {
        let config = config_service.get_config()?;
        telemetry::init_tracing(&config.log_level);
        tracing::info!(
            min_latency_ms = config.service.min_latency_ms,
            max_latency_ms = config.service.max_latency_ms,
            delete_failure_rate = config.service.delete_failure_rate,
            "[Bootstrap] Starting assistant console"
        );
        Self::from_config(config)
    }

    /// Builds the services from an already loaded configuration.
    pub fn from_config(config: ConsoleConfig) -> Result<Self> {
        config.validate()?;
        let repository = Arc::new(InMemoryAssistantRepository::with_config(
            config.service.clone(),
        ));
        Ok(Self::with_repository(
            config,
            repository,
            Arc::new(ThreadRngOutcomes),
        ))
    }

    /// Builds the services around a caller-provided repository.
    pub fn with_repository(
        config: ConsoleConfig,
        repository: Arc<dyn AssistantRepository>,
        outcomes: Arc<dyn OutcomeSource>,
    ) -> Self {
        let state = Arc::new(ConsoleState::new());
        let coordinator = Arc::new(MutationCoordinator::new(repository.clone(), state.clone()));
        let chat = Arc::new(ChatSimulator::new(
            state.clone(),
            config.chat.clone(),
            outcomes,
        ));

        Self {
            config,
            repository,
            state,
            coordinator,
            chat,
        }
    }
}
