//! Display state derived from [`ConnectionState`].
//!
//! Nothing here is stored: each call recomputes the per-entry flags from the
//! phase and the confirmed association, so the catalog itself never changes.

use paylink_server::domain::{Association, MethodId};

use super::{error::ControllerError, phase::Phase, state::ConnectionState};

pub const CONNECT_LABEL: &str = "Connect Payment Address";
pub const DISCONNECT_LABEL: &str = "Disconnect Payment Address";
pub const CONTINUE_LABEL: &str = "Continue";
pub const NEXT_STEP_LABEL: &str = "Next Step";

/// How one catalog entry should be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub id: MethodId,
    pub label: String,
    pub address_hint: String,
    /// Confirmed by the store as the user's method
    pub is_connected: bool,
    /// Selecting it would be refused
    pub is_disabled: bool,
    /// Its address editor is open
    pub is_open: bool,
}

/// Where the surrounding application goes after a method is connected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStage {
    Verify { association: Association },
}

impl ConnectionState {
    /// Per-entry display state, in catalog order
    pub fn entry_views(&self) -> Vec<EntryView> {
        let active_method = self.active_association().and_then(Association::method_id);
        let locked = matches!(self.phase(), Phase::Idle | Phase::Submitting { .. });
        let open_method = self.phase().editing_method();

        self.catalog()
            .entries()
            .iter()
            .map(|entry| {
                let is_connected = active_method == Some(&entry.id);
                EntryView {
                    id: entry.id.clone(),
                    label: entry.label.clone(),
                    address_hint: entry.address_hint.clone(),
                    is_connected,
                    is_disabled: locked || (active_method.is_some() && !is_connected),
                    is_open: open_method == Some(&entry.id),
                }
            })
            .collect()
    }

    /// Whether the primary action button is enabled
    pub fn can_submit(&self) -> bool {
        match self.phase() {
            Phase::Editing { .. } => self.is_address_valid(),
            Phase::Connected { .. } => true,
            Phase::Idle | Phase::Unselected | Phase::Submitting { .. } => false,
        }
    }

    /// Label of the primary action button
    pub fn submit_label(&self) -> &'static str {
        if self.active_association().is_some() {
            DISCONNECT_LABEL
        } else {
            CONNECT_LABEL
        }
    }

    /// Whether the user may move on to the next stage
    pub fn can_proceed(&self) -> bool {
        self.phase().is_connected()
    }

    pub fn proceed_label(&self) -> &'static str {
        if self.can_proceed() {
            NEXT_STEP_LABEL
        } else {
            CONTINUE_LABEL
        }
    }

    /// Outbound signal to the next stage; refused unless connected
    pub fn proceed(&self) -> Result<NextStage, ControllerError> {
        match (self.phase(), self.active_association()) {
            (Phase::Connected { .. }, Some(association)) => Ok(NextStage::Verify {
                association: association.clone(),
            }),
            _ => Err(ControllerError::NotConnected),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use paylink_server::domain::{Catalog, PaymentAddress, PaymentBinding, UserId};

    use super::*;
    use crate::store::StoreError;

    fn user_id() -> UserId {
        UserId::new("1001".to_string()).unwrap()
    }

    fn ready_state() -> ConnectionState {
        let mut state = ConnectionState::new(user_id(), Arc::new(Catalog::default()));
        state
            .apply_fetched(Err(StoreError::NotFound("1001".to_string())))
            .unwrap();
        state
    }

    fn connected(method_id: &str, address: &str) -> ConnectionState {
        let mut state = ConnectionState::new(user_id(), Arc::new(Catalog::default()));
        state
            .apply_fetched(Ok(Association::bound(
                user_id(),
                PaymentBinding::new(
                    MethodId::try_from(method_id).unwrap(),
                    PaymentAddress::try_from(address).unwrap(),
                ),
            )))
            .unwrap();
        state
    }

    fn connected_count(state: &ConnectionState) -> usize {
        state.entry_views().iter().filter(|v| v.is_connected).count()
    }

    #[test]
    fn test_unselected_views_are_all_enabled() {
        // テスト項目: 未接続時は全ての支払い方法が選択可能で、接続済みは 0 件
        let state = ready_state();

        let views = state.entry_views();

        assert_eq!(views.len(), 4);
        assert!(views.iter().all(|v| !v.is_disabled && !v.is_connected && !v.is_open));
        assert!(!state.can_submit());
        assert_eq!(state.submit_label(), CONNECT_LABEL);
        assert_eq!(state.proceed_label(), CONTINUE_LABEL);
    }

    #[test]
    fn test_connected_views_lock_other_entries() {
        // テスト項目: 接続中は接続済みの 1 件以外が無効になる
        let state = connected("upi", "user@upi");

        let views = state.entry_views();

        assert_eq!(connected_count(&state), 1);
        for view in &views {
            if view.id.as_str() == "upi" {
                assert!(view.is_connected);
                assert!(!view.is_disabled);
            } else {
                assert!(!view.is_connected);
                assert!(view.is_disabled);
            }
        }
        assert!(state.can_submit());
        assert_eq!(state.submit_label(), DISCONNECT_LABEL);
        assert_eq!(state.proceed_label(), NEXT_STEP_LABEL);
    }

    #[test]
    fn test_editing_view_marks_open_entry() {
        // テスト項目: 編集中の支払い方法だけがエディタを開いている
        let mut state = ready_state();
        state.select("kucoin").unwrap();

        let open: Vec<_> = state
            .entry_views()
            .into_iter()
            .filter(|v| v.is_open)
            .map(|v| v.id.into_string())
            .collect();

        assert_eq!(open, vec!["kucoin".to_string()]);
        assert!(!state.can_submit());

        state.edit_address("k-1").unwrap();
        assert!(state.can_submit());
    }

    #[test]
    fn test_submitting_disables_everything() {
        // テスト項目: 送信中は全ての支払い方法と送信ボタンが無効
        let mut state = connected("binance", "abc123");
        state.begin_disconnect().unwrap();

        assert!(state.entry_views().iter().all(|v| v.is_disabled));
        assert!(!state.can_submit());
        // still connected until the store confirms
        assert_eq!(connected_count(&state), 1);
        assert!(!state.can_proceed());
    }

    #[test]
    fn test_proceed_requires_connection() {
        // テスト項目: 接続済みのときだけ次のステップに進める
        let state = ready_state();
        assert_eq!(state.proceed(), Err(ControllerError::NotConnected));

        let state = connected("binance", "abc123");
        let NextStage::Verify { association } = state.proceed().unwrap();
        assert_eq!(association.address().unwrap().as_str(), "abc123");
    }
}
