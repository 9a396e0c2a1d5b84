use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::api::ApiError;

/// Outcome of a user action, shown until the dialog is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMessage {
    pub success: bool,
    pub message: String,
}

impl ResultMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn from_result<T>(result: &Result<T, ApiError>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self::success(success_message),
            Err(err) => Self::failure(err.message.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.success {
            "Success"
        } else {
            "Failed"
        }
    }
}

/// Clears `result` and then calls `on_close`, which list views use to
/// refetch their data.
pub fn dismiss_result(result: RwSignal<Option<ResultMessage>>, on_close: Callback<()>) {
    result.set(None);
    on_close.call(());
}

#[component]
pub fn ResultDialog(
    result: RwSignal<Option<ResultMessage>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dismiss = move || dismiss_result(result, on_close);

    view! {
        <Show when=move || result.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| dismiss()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-sm rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 text-center"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dismiss();
                        }
                    }
                >
                    {move || {
                        let current = result.get();
                        let success = current.as_ref().map(|r| r.success).unwrap_or(false);
                        let (icon, tone) = if success {
                            ("fa-circle-check", "text-status-success-text")
                        } else {
                            ("fa-circle-xmark", "text-status-error-text")
                        };
                        view! {
                            <i class=format!("fas {} text-4xl {}", icon, tone)></i>
                            <h2 class="text-lg font-semibold text-fg">
                                {current.as_ref().map(|r| r.title()).unwrap_or_default()}
                            </h2>
                            <p class="text-sm text-fg-muted">
                                {current.map(|r| r.message).unwrap_or_default()}
                            </p>
                        }
                    }}
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| dismiss()
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_uses_error_message_on_failure() {
        let ok: Result<(), ApiError> = Ok(());
        assert_eq!(
            ResultMessage::from_result(&ok, "Leave submitted"),
            ResultMessage::success("Leave submitted")
        );
        let err: Result<(), ApiError> = Err(ApiError::http(400, "Overlapping leave"));
        let message = ResultMessage::from_result(&err, "Leave submitted");
        assert!(!message.success);
        assert_eq!(message.message, "Overlapping leave");
        assert_eq!(message.title(), "Failed");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn dialog_hidden_without_result() {
        let html = render_to_string(|| {
            let result = create_rw_signal(None::<ResultMessage>);
            view! { <ResultDialog result=result on_close=Callback::new(|_: ()| {}) /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn dialog_shows_failure_message() {
        let html = render_to_string(|| {
            let result = create_rw_signal(Some(ResultMessage::failure("Outside store radius")));
            view! { <ResultDialog result=result on_close=Callback::new(|_: ()| {}) /> }
        });
        assert!(html.contains("Failed"));
        assert!(html.contains("Outside store radius"));
    }

    #[test]
    fn close_callback_drives_refresh() {
        with_runtime(|| {
            let refreshes = create_rw_signal(0);
            let result = create_rw_signal(Some(ResultMessage::success("Clocked in")));
            let on_close = Callback::new(move |_: ()| refreshes.update(|n| *n += 1));
            dismiss_result(result, on_close);
            assert_eq!(refreshes.get(), 1);
            assert!(result.get().is_none());
        });
    }
}
