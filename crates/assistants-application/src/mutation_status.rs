//! Observable status of each mutation kind.
//!
//! The console disables its controls while a mutation is pending and shows a
//! toast when one fails; both read the latest [`MutationStatus`] from a
//! `tokio::sync::watch` channel.

use std::fmt;

use assistants_core::AssistantError;
use assistants_core::assistant::Assistant;
use tokio::sync::watch;

/// The mutations the coordinator issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    UpdateRules,
}

impl MutationKind {
    pub const ALL: [MutationKind; 4] = [
        MutationKind::Create,
        MutationKind::Update,
        MutationKind::Delete,
        MutationKind::UpdateRules,
    ];
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::UpdateRules => "update_rules",
        };
        f.write_str(name)
    }
}

/// Latest state of one mutation kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationStatus {
    /// Never run, or reset.
    #[default]
    Idle,
    /// Issued and not settled yet.
    Pending,
    /// Settled successfully; carries the returned assistant, if any.
    Succeeded(Option<Assistant>),
    /// Settled with an error.
    Failed(AssistantError),
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationStatus::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MutationStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&AssistantError> {
        match self {
            MutationStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&Assistant> {
        match self {
            MutationStatus::Succeeded(data) => data.as_ref(),
            _ => None,
        }
    }
}

/// One status channel per mutation kind.
pub struct MutationTracker {
    create: watch::Sender<MutationStatus>,
    update: watch::Sender<MutationStatus>,
    delete: watch::Sender<MutationStatus>,
    update_rules: watch::Sender<MutationStatus>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self {
            create: watch::channel(MutationStatus::Idle).0,
            update: watch::channel(MutationStatus::Idle).0,
            delete: watch::channel(MutationStatus::Idle).0,
            update_rules: watch::channel(MutationStatus::Idle).0,
        }
    }

    fn sender(&self, kind: MutationKind) -> &watch::Sender<MutationStatus> {
        match kind {
            MutationKind::Create => &self.create,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
            MutationKind::UpdateRules => &self.update_rules,
        }
    }

    pub fn subscribe(&self, kind: MutationKind) -> watch::Receiver<MutationStatus> {
        self.sender(kind).subscribe()
    }

    pub fn status(&self, kind: MutationKind) -> MutationStatus {
        self.sender(kind).borrow().clone()
    }

    pub(crate) fn set(&self, kind: MutationKind, status: MutationStatus) {
        // send_replace keeps the value even when nobody is subscribed.
        self.sender(kind).send_replace(status);
    }

    pub(crate) fn settle<T>(
        &self,
        kind: MutationKind,
        result: &Result<T, AssistantError>,
        data: impl FnOnce(&T) -> Option<Assistant>,
    ) {
        let status = match result {
            Ok(value) => MutationStatus::Succeeded(data(value)),
            Err(err) => MutationStatus::Failed(err.clone()),
        };
        self.set(kind, status);
    }
}

impl Default for MutationTracker {
    fn default() -> Self {
        Self::new()
    }
}
