use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Pill badge for the opaque status strings the backend returns.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!(
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        status_classes(&status)
    );
    view! { <span class=class>{status}</span> }
}

pub fn status_classes(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "APPROVED" | "PRESENT" | "ON_TIME" => "bg-status-success-bg text-status-success-text",
        "REJECTED" | "ABSENT" => "bg-status-error-bg text-status-error-text",
        "PENDING" | "LATE" => "bg-status-warning-bg text-status-warning-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variant_includes_primary_class() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("danger"));
    }

    #[test]
    fn status_classes_are_case_insensitive() {
        assert_eq!(status_classes("approved"), status_classes("APPROVED"));
        assert!(status_classes("Pending").contains("warning"));
        assert!(status_classes("SOMETHING_NEW").contains("muted"));
    }
}
