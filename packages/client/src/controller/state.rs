//! Connection state machine.
//!
//! Transitions are driven by discrete events: user input (`select`,
//! `edit_address`, `begin_submit`, `begin_disconnect`) and store responses
//! (`apply_fetched`, `complete`). Nothing here performs I/O; a `begin_*` call
//! moves the machine to [`Phase::Submitting`] and hands back the request to
//! send, and `complete` applies the store's answer.

use std::sync::Arc;

use paylink_server::domain::{
    Association, Catalog, MethodId, PaymentAddress, PaymentBinding, UserId,
};

use super::{
    error::ControllerError,
    phase::{PendingRequest, Phase},
};
use crate::store::StoreError;

/// Client-side state for one user's payment method connection
#[derive(Debug, Clone)]
pub struct ConnectionState {
    user_id: UserId,
    catalog: Arc<Catalog>,
    phase: Phase,
    selected_method_id: Option<MethodId>,
    draft_address: String,
    is_address_valid: bool,
    /// Last association confirmed by the store; only set while bound
    active_association: Option<Association>,
    last_error: Option<StoreError>,
}

impl ConnectionState {
    /// New state in [`Phase::Idle`]
    pub fn new(user_id: UserId, catalog: Arc<Catalog>) -> Self {
        Self {
            user_id,
            catalog,
            phase: Phase::Idle,
            selected_method_id: None,
            draft_address: String::new(),
            is_address_valid: false,
            active_association: None,
            last_error: None,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected_method_id(&self) -> Option<&MethodId> {
        self.selected_method_id.as_ref()
    }

    pub fn draft_address(&self) -> &str {
        &self.draft_address
    }

    pub fn is_address_valid(&self) -> bool {
        self.is_address_valid
    }

    pub fn active_association(&self) -> Option<&Association> {
        self.active_association.as_ref()
    }

    /// Error from the most recent failed store call, cleared by the next success
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Apply the result of fetching the current association.
    ///
    /// A missing user or a failed fetch both land in `Unselected`; only the
    /// latter is surfaced as an error.
    pub fn apply_fetched(
        &mut self,
        result: Result<Association, StoreError>,
    ) -> Result<(), ControllerError> {
        if self.phase.is_submitting() {
            return Err(ControllerError::Busy);
        }

        match result {
            Ok(association) => {
                self.last_error = None;
                match association.binding.clone() {
                    Some(binding) => self.enter_connected(association, binding),
                    None => self.enter_unselected(),
                }
            }
            Err(StoreError::NotFound(_)) => {
                self.last_error = None;
                self.enter_unselected();
            }
            Err(err) => {
                tracing::warn!("Fetching association for '{}' failed: {}", self.user_id, err);
                self.enter_unselected();
                self.last_error = Some(err);
            }
        }
        Ok(())
    }

    /// Open, switch or collapse the address editor for a catalog entry.
    ///
    /// Selecting the open entry again collapses it; selecting another one
    /// discards the current draft.
    pub fn select(&mut self, method_id: &str) -> Result<(), ControllerError> {
        match &self.phase {
            Phase::Idle => return Err(ControllerError::NotReady),
            Phase::Submitting { .. } => return Err(ControllerError::Busy),
            Phase::Connected { method_id, .. } => {
                return Err(ControllerError::SelectionLocked {
                    active: method_id.clone(),
                });
            }
            Phase::Unselected | Phase::Editing { .. } => {}
        }

        let method_id = self
            .catalog
            .resolve(method_id)
            .map_err(|_| ControllerError::UnknownMethod(method_id.trim().to_string()))?;

        if self.phase.editing_method() == Some(&method_id) {
            self.enter_unselected();
        } else {
            self.clear_draft();
            self.selected_method_id = Some(method_id.clone());
            self.phase = Phase::Editing { method_id };
        }
        Ok(())
    }

    /// Replace the draft address of the open editor
    pub fn edit_address(&mut self, text: impl Into<String>) -> Result<(), ControllerError> {
        match &self.phase {
            Phase::Idle => Err(ControllerError::NotReady),
            Phase::Submitting { .. } => Err(ControllerError::Busy),
            Phase::Editing { .. } => {
                self.draft_address = text.into();
                self.is_address_valid = PaymentAddress::is_acceptable(&self.draft_address);
                Ok(())
            }
            Phase::Unselected | Phase::Connected { .. } => Err(ControllerError::NotEditing),
        }
    }

    /// The primary action: connect from `Editing`, disconnect from `Connected`.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, ControllerError> {
        match &self.phase {
            Phase::Idle => Err(ControllerError::NotReady),
            Phase::Submitting { .. } => Err(ControllerError::Busy),
            Phase::Unselected => Err(ControllerError::NothingSelected),
            Phase::Connected { .. } => self
                .begin_disconnect()?
                .ok_or(ControllerError::NotConnected),
            Phase::Editing { method_id } => {
                let address = PaymentAddress::new(self.draft_address.clone())
                    .map_err(ControllerError::InputInvalid)?;
                let request = PendingRequest::Connect {
                    method_id: method_id.clone(),
                    address,
                };
                self.phase = Phase::Submitting {
                    request: request.clone(),
                };
                Ok(request)
            }
        }
    }

    /// Start a disconnect. `Ok(None)` when nothing is connected, state unchanged.
    pub fn begin_disconnect(&mut self) -> Result<Option<PendingRequest>, ControllerError> {
        match &self.phase {
            Phase::Idle => Err(ControllerError::NotReady),
            Phase::Submitting { .. } => Err(ControllerError::Busy),
            Phase::Unselected | Phase::Editing { .. } => Ok(None),
            Phase::Connected { .. } => {
                let request = PendingRequest::Disconnect;
                self.phase = Phase::Submitting {
                    request: request.clone(),
                };
                Ok(Some(request))
            }
        }
    }

    /// Apply the store's answer to the request in flight.
    ///
    /// On failure the phase from before the request is restored and the
    /// error is both recorded and returned.
    pub fn complete(
        &mut self,
        result: Result<Association, StoreError>,
    ) -> Result<(), ControllerError> {
        let request = match &self.phase {
            Phase::Submitting { request } => request.clone(),
            _ => return Err(ControllerError::NoRequestInFlight),
        };

        match (request, result) {
            (PendingRequest::Connect { method_id, address }, Ok(association)) => {
                match association.binding.clone() {
                    Some(binding) if binding.method_id == method_id && binding.address == address => {
                        self.last_error = None;
                        self.enter_connected(association, binding);
                        Ok(())
                    }
                    Some(binding) => self.revert_connect(
                        method_id,
                        StoreError::Validation(format!(
                            "store acknowledged '{}' instead of the requested payment method",
                            binding.method_id
                        )),
                    ),
                    None => self.revert_connect(
                        method_id,
                        StoreError::Validation(
                            "store acknowledged the connect without a payment method".to_string(),
                        ),
                    ),
                }
            }
            (PendingRequest::Connect { method_id, .. }, Err(err)) => {
                self.revert_connect(method_id, err)
            }
            (PendingRequest::Disconnect, Ok(association)) if !association.is_connected() => {
                self.last_error = None;
                self.enter_unselected();
                Ok(())
            }
            (PendingRequest::Disconnect, Ok(_)) => self.revert_disconnect(StoreError::Validation(
                "store still reports a connected payment method".to_string(),
            )),
            (PendingRequest::Disconnect, Err(err)) => self.revert_disconnect(err),
        }
    }

    fn enter_connected(&mut self, association: Association, binding: PaymentBinding) {
        self.clear_draft();
        self.selected_method_id = Some(binding.method_id.clone());
        self.phase = Phase::Connected {
            method_id: binding.method_id,
            address: binding.address,
        };
        self.active_association = Some(association);
    }

    fn enter_unselected(&mut self) {
        self.clear_draft();
        self.selected_method_id = None;
        self.active_association = None;
        self.phase = Phase::Unselected;
    }

    fn clear_draft(&mut self) {
        self.draft_address.clear();
        self.is_address_valid = false;
    }

    fn revert_connect(
        &mut self,
        method_id: MethodId,
        err: StoreError,
    ) -> Result<(), ControllerError> {
        tracing::warn!("Connecting '{}' for '{}' failed: {}", method_id, self.user_id, err);
        // draft and validity were left untouched while submitting
        self.phase = Phase::Editing { method_id };
        self.last_error = Some(err.clone());
        Err(ControllerError::Store(err))
    }

    fn revert_disconnect(&mut self, err: StoreError) -> Result<(), ControllerError> {
        tracing::warn!("Disconnecting '{}' failed: {}", self.user_id, err);
        self.phase = match self
            .active_association
            .as_ref()
            .and_then(|a| a.binding.clone())
        {
            Some(binding) => Phase::Connected {
                method_id: binding.method_id,
                address: binding.address,
            },
            None => Phase::Unselected,
        };
        self.last_error = Some(err.clone());
        Err(ControllerError::Store(err))
    }
}
