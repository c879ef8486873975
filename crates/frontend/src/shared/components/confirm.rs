//! Confirmation gate for destructive actions.
//!
//! The state machine is a plain struct so the confirm-exactly-once /
//! cancel-never-fires semantics stay testable; the dialog component wraps it
//! in a signal and runs the callback only on an explicit confirm.

use leptos::prelude::*;
use thaw::*;

/// Pending confirmation for a single target id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmFlow {
    pending: Option<String>,
}

impl ConfirmFlow {
    pub fn request(&mut self, id: String) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Takes the pending id; a second call returns `None`.
    pub fn confirm(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

#[component]
pub fn ConfirmDialog(
    flow: RwSignal<ConfirmFlow>,

    /// Dialog headline
    #[prop(into, optional)]
    title: Option<String>,

    /// Supporting text under the headline
    #[prop(into, optional)]
    message: Option<String>,

    /// Runs with the confirmed id; never runs on cancel.
    on_confirm: Callback<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Are you sure?".to_string());
    let message = message.unwrap_or_else(|| "You won't be able to revert this!".to_string());

    view! {
        <Show when=move || flow.with(|f| f.is_open())>
            <div class="modal-overlay" on:click=move |_| flow.update(|f| f.cancel())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.clone()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{message.clone()}</p>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| flow.update(|f| f.cancel())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                let confirmed = flow
                                    .try_update(|f| f.confirm())
                                    .flatten();
                                if let Some(id) = confirmed {
                                    on_confirm.run(id);
                                }
                            }
                        >
                            "Yes, delete it!"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_fires_exactly_once() {
        let mut flow = ConfirmFlow::default();
        flow.request("42".to_string());
        assert!(flow.is_open());
        assert_eq!(flow.confirm(), Some("42".to_string()));
        // The dialog is gone; a stray second confirm must be a no-op.
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_cancel_never_yields_an_id() {
        let mut flow = ConfirmFlow::default();
        flow.request("42".to_string());
        flow.cancel();
        assert!(!flow.is_open());
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_new_request_replaces_previous() {
        let mut flow = ConfirmFlow::default();
        flow.request("1".to_string());
        flow.request("2".to_string());
        assert_eq!(flow.confirm(), Some("2".to_string()));
    }
}
