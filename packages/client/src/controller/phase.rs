//! Phases of the connection state machine.

use paylink_server::domain::{MethodId, PaymentAddress};

/// Mutation sent to the store while in [`Phase::Submitting`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    /// Store `method_id` and `address` together
    Connect {
        method_id: MethodId,
        address: PaymentAddress,
    },
    /// Clear the active association
    Disconnect,
}

/// Current phase of the connection state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the initial fetch
    #[default]
    Idle,
    /// No association and no open editor
    Unselected,
    /// Address editor open for `method_id`, not saved
    Editing { method_id: MethodId },
    /// A request is in flight; every action is refused until it completes
    Submitting { request: PendingRequest },
    /// The store confirmed this binding
    Connected {
        method_id: MethodId,
        address: PaymentAddress,
    },
}

impl Phase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Method whose editor is open, if any
    pub fn editing_method(&self) -> Option<&MethodId> {
        match self {
            Self::Editing { method_id } => Some(method_id),
            _ => None,
        }
    }

    /// Short name used in logs and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Unselected => "unselected",
            Self::Editing { .. } => "editing",
            Self::Submitting { .. } => "submitting",
            Self::Connected { .. } => "connected",
        }
    }
}
