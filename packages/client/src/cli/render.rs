//! Text rendering of the controller state.

use std::fmt::Write;

use crate::controller::{ConnectionState, Phase};

/// Catalog entries, one per line, with their derived display state
pub fn render_entries(state: &ConnectionState) -> String {
    let mut out = String::new();
    for view in state.entry_views() {
        let marker = if view.is_connected { "[x]" } else { "[ ]" };
        let status = if view.is_connected {
            "Connected"
        } else {
            "Not Connected"
        };
        let disabled = if view.is_disabled { " (locked)" } else { "" };
        let _ = writeln!(
            out,
            "  {marker} {:<12} {:<14} {status}{disabled}",
            view.id.as_str(),
            view.label
        );
        if view.is_open {
            let draft = state.draft_address();
            let shown = if draft.is_empty() {
                format!("<{}>", view.address_hint)
            } else {
                draft.to_string()
            };
            let _ = writeln!(out, "        address: {shown}");
        }
    }
    out
}

/// Phase, affordances and the last error
pub fn render_status(state: &ConnectionState) -> String {
    let mut out = String::new();
    let phase = match state.phase() {
        Phase::Connected { method_id, address } => format!("connected ({method_id}: {address})"),
        Phase::Editing { method_id } => format!("editing {method_id}"),
        other => other.name().to_string(),
    };
    let _ = writeln!(out, "  status: {phase}");

    let submit = if state.can_submit() { "" } else { " (disabled)" };
    let proceed = if state.can_proceed() { "" } else { " (disabled)" };
    let _ = writeln!(
        out,
        "  actions: [{}]{submit}  [{}]{proceed}",
        state.submit_label(),
        state.proceed_label()
    );
    if let Some(err) = state.last_error() {
        let hint = if err.is_retryable() { ", try again" } else { "" };
        let _ = writeln!(out, "  error: {err}{hint}");
    }
    out
}
