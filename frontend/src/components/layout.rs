use crate::{components::sidebar::Sidebar, state::session::use_session};
use leptos::*;
use leptos_router::{use_location, RouterContext};

/// Current route path, or an empty path when rendered outside a router.
fn current_path() -> Signal<String> {
    if use_context::<RouterContext>().is_some() {
        let location = use_location();
        Signal::derive(move || location.pathname.get())
    } else {
        Signal::derive(String::new)
    }
}

#[component]
pub fn Header(#[prop(into)] on_toggle_menu: Callback<()>) -> impl IntoView {
    let (session, _) = use_session();
    let display_name = move || session.with(|state| state.display_name());
    let role_label = move || {
        session
            .with(|state| state.role())
            .map(|role| role.label())
            .unwrap_or_default()
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden text-fg-muted hover:text-fg"
                            aria-label="Toggle menu"
                            on:click=move |_| on_toggle_menu.call(())
                        >
                            <i class="fas fa-bars"></i>
                        </button>
                        <h1 class="text-xl font-semibold text-fg">"Presensi"</h1>
                    </div>
                    <div class="text-right">
                        <p class="text-sm font-medium text-fg">{display_name}</p>
                        <p class="text-xs text-fg-muted">{role_label}</p>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (session, _) = use_session();
    let role = Signal::derive(move || session.with(|state| state.role()));
    let path = current_path();
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open));

    view! {
        <div class="min-h-screen bg-surface">
            <Header on_toggle_menu=toggle_menu />
            <div class="flex">
                <div class=move || {
                    if menu_open.get() { "block" } else { "hidden lg:block" }
                }>
                    <Sidebar role=role current_path=path />
                </div>
                <main class="flex-1 min-w-0 py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
            </div>
        </div>
    }
}

/// Layout plus the page heading every screen starts with.
#[component]
pub fn PageFrame(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{title}</h1>
                    {description.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
                </div>
                {children()}
            </div>
        </Layout>
    }
}
