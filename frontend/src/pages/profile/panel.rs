use leptos::*;

use crate::{
    api::User,
    components::{
        empty_state::{ErrorMessage, LoadingState},
        layout::PageFrame,
    },
    utils::format::{format_date, format_time},
};

use super::view_model::{gender_label, use_profile_view_model};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <PageFrame title="Profile">
            <Suspense fallback=move || view! { <LoadingState /> }>
                {move || {
                    vm.me_resource
                        .get()
                        .map(|result| match result {
                            Ok(user) => view! { <ProfileCard user=user /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        })
                }}
            </Suspense>
        </PageFrame>
    }
}

#[component]
pub fn ProfileCard(user: User) -> impl IntoView {
    let profile = user.profile.clone();
    let text = |value: Option<String>| value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "-".into());
    let name = profile
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| user.username.clone());
    let schedule = user
        .schedule
        .as_ref()
        .map(|s| format!("{} ({} - {})", s.name, format_time(&s.start_time), format_time(&s.end_time)))
        .unwrap_or_else(|| "-".into());

    let rows = vec![
        ("Username", user.username.clone()),
        ("Email", user.email.clone()),
        ("Role", user.role.label().to_string()),
        ("Phone", text(profile.as_ref().and_then(|p| p.phone_number.clone()))),
        ("Address", text(profile.as_ref().and_then(|p| p.address.clone()))),
        (
            "Birth date",
            profile
                .as_ref()
                .and_then(|p| p.birth_date.as_deref())
                .map(format_date)
                .unwrap_or_else(|| "-".into()),
        ),
        (
            "Gender",
            gender_label(profile.as_ref().and_then(|p| p.gender.as_deref())).to_string(),
        ),
        ("Store", text(user.store.as_ref().map(|s| s.name.clone()))),
        ("Schedule", schedule),
    ];

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-xl font-semibold text-fg">{name}</h2>
                <p class="text-sm text-fg-muted">
                    {if user.is_active { "Active account" } else { "Inactive account" }}
                </p>
            </div>
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-3 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="text-fg-muted">{label}</dt>
                            <dd class="text-fg font-medium">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
