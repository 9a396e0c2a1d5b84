use leptos::*;

use crate::components::common::{Button, ButtonVariant};

/// An admin's verdict on a pending leave or overtime application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }

    pub fn success_message(self, subject: &str) -> String {
        match self {
            Decision::Approve => format!("{} approved", subject),
            Decision::Reject => format!("{} rejected", subject),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRequest {
    pub id: i64,
    pub decision: Decision,
}

/// Only pending applications can still be decided.
pub fn is_pending(status: &str) -> bool {
    status.eq_ignore_ascii_case("PENDING")
}

#[component]
pub fn DecisionButtons(
    id: i64,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_decide: Callback<DecisionRequest>,
) -> impl IntoView {
    let decide = move |decision: Decision| on_decide.call(DecisionRequest { id, decision });
    view! {
        <div class="flex gap-2">
            <Button
                variant=ButtonVariant::Primary
                class="px-2 py-1 text-xs"
                disabled=pending
                on:click=move |_| decide(Decision::Approve)
            >
                {Decision::Approve.label()}
            </Button>
            <Button
                variant=ButtonVariant::Danger
                class="px-2 py-1 text-xs"
                disabled=pending
                on:click=move |_| decide(Decision::Reject)
            >
                {Decision::Reject.label()}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_check_ignores_case() {
        assert!(is_pending("PENDING"));
        assert!(is_pending("pending"));
        assert!(!is_pending("APPROVED"));
    }

    #[test]
    fn success_message_names_subject() {
        assert_eq!(Decision::Approve.success_message("Leave"), "Leave approved");
        assert_eq!(Decision::Reject.success_message("Overtime"), "Overtime rejected");
    }
}
