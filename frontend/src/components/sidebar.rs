use leptos::*;

use crate::{
    api::Role,
    navigation::NavItem,
};

const LINK_BASE: &str = "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium";
const LINK_ACTIVE: &str = "bg-action-primary-bg text-action-primary-text";
const LINK_IDLE: &str = "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";

fn link_class(active: bool) -> String {
    format!("{} {}", LINK_BASE, if active { LINK_ACTIVE } else { LINK_IDLE })
}

#[component]
pub fn Sidebar(
    #[prop(into)] role: Signal<Option<Role>>,
    #[prop(into)] current_path: Signal<String>,
) -> impl IntoView {
    view! {
        <nav class="w-64 shrink-0 border-r border-border bg-surface-elevated min-h-screen px-3 py-6 space-y-1" aria-label="Main">
            {move || match role.get() {
                Some(role) => role
                    .menu()
                    .iter()
                    .map(|item| view! { <SidebarEntry item=*item current_path=current_path /> })
                    .collect_view(),
                None => view! {
                    <p class="px-3 text-sm text-fg-muted">"No menu available"</p>
                }
                .into_view(),
            }}
        </nav>
    }
}

#[component]
fn SidebarEntry(item: NavItem, current_path: Signal<String>) -> impl IntoView {
    if !item.has_children() {
        return view! {
            <a
                href=item.route
                class=move || link_class(current_path.get() == item.route)
            >
                <i class=format!("fas {} w-4", item.icon)></i>
                <span>{item.label}</span>
            </a>
        }
        .into_view();
    }

    let expanded = create_rw_signal(item.matches(&current_path.get_untracked()));
    view! {
        <div>
            <button
                type="button"
                class=move || link_class(false) + " w-full"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <i class=format!("fas {} w-4", item.icon)></i>
                <span class="flex-1 text-left">{item.label}</span>
                <i class=move || {
                    if expanded.get() { "fas fa-chevron-down text-xs" } else { "fas fa-chevron-right text-xs" }
                }></i>
            </button>
            <Show when=move || expanded.get()>
                <div class="ml-6 mt-1 space-y-1">
                    {item
                        .children
                        .iter()
                        .map(|child| {
                            let child = *child;
                            view! {
                                <a
                                    href=child.route
                                    class=move || link_class(current_path.get() == child.route)
                                >
                                    <i class=format!("fas {} w-4", child.icon)></i>
                                    <span>{child.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_view()
}
