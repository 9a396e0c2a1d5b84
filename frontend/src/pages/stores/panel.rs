use leptos::*;

use crate::{
    api::OwnedStore,
    components::{
        common::{Button, ButtonVariant},
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
        result_dialog::ResultDialog,
    },
    utils::format::format_currency,
};

use super::view_model::{use_stores_view_model, StoresViewModel};

const INPUT: &str = "mt-1 block w-full rounded-md border border-border bg-surface px-2 py-1 text-sm";
const SUBMIT: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn StoresPage() -> impl IntoView {
    let vm = use_stores_view_model();

    view! {
        <PageFrame title="Stores" description="Geofence, break and penalty settings for your stores.">
            <Suspense fallback=move || view! { <LoadingState /> }>
                {move || {
                    vm.stores_resource
                        .get()
                        .map(|result| match result {
                            Ok(stores) if stores.is_empty() => view! {
                                <EmptyState title="No stores" description="Stores you own will appear here." />
                            }
                            .into_view(),
                            Ok(stores) => view! {
                                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                                    {stores
                                        .into_iter()
                                        .map(|store| view! { <StoreCard store=store vm=vm /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_view(),
                            Err(err) => view! { <ErrorMessage message=err.message /> }.into_view(),
                        })
                }}
            </Suspense>
            <ResultDialog result=vm.result on_close=vm.on_result_close() />
        </PageFrame>
    }
}

#[component]
fn StoreCard(store: OwnedStore, vm: StoresViewModel) -> impl IntoView {
    let id = store.id;
    let editing = move || vm.editing.get() == Some(id);
    let name = store.name.clone();
    let location = store.location.clone().unwrap_or_else(|| "-".into());
    let for_edit = store.clone();
    let for_summary = store;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h2 class="text-lg font-semibold text-fg">{name}</h2>
                    <p class="text-sm text-fg-muted">{location}</p>
                </div>
                <Show when=move || !editing()>
                    <Button
                        variant=ButtonVariant::Secondary
                        class="px-3 py-1 text-sm"
                        on:click={
                            let store = for_edit.clone();
                            move |_| vm.start_edit(&store)
                        }
                    >
                        "Edit"
                    </Button>
                </Show>
            </div>
            <Show
                when=editing
                fallback=move || view! { <StoreSummary store=for_summary.clone() /> }
            >
                <StoreEditor vm=vm />
            </Show>
        </div>
    }
}

#[component]
pub fn StoreSummary(store: OwnedStore) -> impl IntoView {
    let rows = vec![
        ("Coordinates", format!("{:.5}, {:.5}", store.latitude, store.longitude)),
        ("Radius", format!("{} m", store.radius)),
        ("Break duration", format!("{} minutes", store.break_duration)),
        (
            "Breaks used",
            format!("{} of {}", store.current_break, store.max_break),
        ),
        (
            "Late clock-in penalty",
            format_currency(store.late_clock_in_penalty_amount),
        ),
        (
            "Late break penalty",
            format_currency(store.late_break_penalty_amount),
        ),
        (
            "Overtime multiplier",
            format!("{}x", store.overtime_multiplier),
        ),
    ];
    view! {
        <dl class="grid grid-cols-2 gap-x-4 gap-y-2 text-sm">
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <dt class="text-fg-muted">{label}</dt>
                    <dd class="text-fg font-medium">{value}</dd>
                })
                .collect_view()}
        </dl>
    }
}

#[component]
fn StoreField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let input_mode = if numeric { "decimal" } else { "text" };
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted">{label}</label>
            <input
                type="text"
                inputmode=input_mode
                class=INPUT
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn StoreEditor(vm: StoresViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.save_action.pending();
    view! {
        <form
            class="space-y-3"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save();
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <StoreField label="Name" value=form.name />
                <StoreField label="Location" value=form.location />
                <StoreField label="Latitude" value=form.latitude numeric=true />
                <StoreField label="Longitude" value=form.longitude numeric=true />
                <StoreField label="Radius (m)" value=form.radius numeric=true />
                <StoreField label="Break duration (minutes)" value=form.break_duration numeric=true />
                <StoreField label="Maximum breaks" value=form.max_break numeric=true />
                <StoreField label="Late clock-in penalty" value=form.late_clock_in_penalty numeric=true />
                <StoreField label="Late break penalty" value=form.late_break_penalty numeric=true />
                <StoreField label="Overtime multiplier" value=form.overtime_multiplier numeric=true />
            </div>
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    class="px-4 py-2 text-sm"
                    on:click=move |_| vm.cancel_edit()
                >
                    "Cancel"
                </Button>
                <button
                    type="submit"
                    class=format!("{} {}", SUBMIT, ButtonVariant::Primary.classes())
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::{helpers::provide_page_context, ssr::render_to_string};

    #[test]
    fn summary_lists_store_settings() {
        let store: OwnedStore =
            serde_json::from_value(crate::api::test_support::store_json(1)).unwrap();
        let html = render_to_string(move || view! { <StoreSummary store=store /> });
        assert!(html.contains("150 m"));
        assert!(html.contains("60 minutes"));
        assert!(html.contains("0 of 2"));
        assert!(html.contains("1.5x"));
    }

    #[test]
    fn page_renders_frame() {
        let html = render_to_string(|| {
            provide_page_context(Some(Role::Owner));
            view! { <StoresPage /> }
        });
        assert!(html.contains("Stores"));
        assert!(html.contains("Geofence"));
    }
}
