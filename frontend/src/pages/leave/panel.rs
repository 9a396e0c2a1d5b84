use leptos::*;

use crate::{
    api::LeaveApplication,
    components::{
        common::{ButtonVariant, StatusBadge},
        date_range::DateRangePicker,
        empty_state::{EmptyState, ErrorMessage, LoadingState},
        layout::PageFrame,
        pagination::PaginationFooter,
        result_dialog::ResultDialog,
    },
    pages::approval::{is_pending, DecisionButtons, DecisionRequest},
    utils::format::format_date,
};

use super::view_model::{use_leave_view_model, LeaveViewModel};

const TH: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";
const SUBMIT: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 disabled:cursor-not-allowed";
const INPUT: &str = "mt-1 block w-full rounded-md border border-border bg-surface px-2 py-1 text-sm";

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();
    let list = vm.list;
    let pagination = Signal::derive(move || {
        let page = vm.leaves_resource.get().and_then(Result::ok);
        list.pagination(page.as_ref())
    });
    let title = move || {
        if vm.can_decide().get() {
            "Leave Requests"
        } else {
            "Leave"
        }
    };

    view! {
        <PageFrame title="Leave" description="Leave applications and their approval status.">
            <Show when=move || vm.can_apply().get()>
                <LeaveForm vm=vm />
            </Show>
            <div class="bg-surface-elevated shadow rounded-lg">
                <div class="p-4 flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <DateRangePicker range=list.range on_change=list.on_range_change() />
                </div>
                <div class="overflow-x-auto">
                    <Suspense fallback=move || view! { <LoadingState /> }>
                        {move || {
                            vm.leaves_resource
                                .get()
                                .map(|result| match result {
                                    Ok(page) if page.content.is_empty() => view! {
                                        <div class="p-4">
                                            <EmptyState title="No leave applications" />
                                        </div>
                                    }
                                    .into_view(),
                                    Ok(page) => view! {
                                        <LeaveTable
                                            rows=page.content
                                            can_decide=vm.can_decide().get()
                                            pending=vm.decision_action.pending()
                                            on_decide=Callback::new(move |request: DecisionRequest| {
                                                vm.decision_action.dispatch(request)
                                            })
                                        />
                                    }
                                    .into_view(),
                                    Err(err) => view! { <div class="p-4"><ErrorMessage message=err.message /></div> }.into_view(),
                                })
                        }}
                    </Suspense>
                </div>
                <PaginationFooter
                    state=pagination
                    on_page_change=list.on_page_change()
                    on_page_size_change=list.on_page_size_change()
                />
            </div>
            <ResultDialog result=vm.result on_close=vm.on_result_close() />
        </PageFrame>
    }
}

#[component]
fn LeaveForm(vm: LeaveViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.submit_action.pending();
    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-4 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <h2 class="text-lg font-semibold text-fg">"Apply for leave"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Start date"</label>
                    <input
                        type="date"
                        class=INPUT
                        prop:value=move || form.start_signal().get()
                        on:input=move |ev| form.start_signal().set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"End date"</label>
                    <input
                        type="date"
                        class=INPUT
                        min=move || form.start_signal().get()
                        prop:value=move || form.end_signal().get()
                        on:input=move |ev| form.end_signal().set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label class="block text-sm font-medium text-fg-muted">"Reason"</label>
                <textarea
                    class=INPUT
                    rows="3"
                    prop:value=move || form.description_signal().get()
                    on:input=move |ev| form.description_signal().set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="flex justify-end">
                <button
                    type="submit"
                    class=format!("{} {}", SUBMIT, ButtonVariant::Primary.classes())
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn LeaveTable(
    rows: Vec<LeaveApplication>,
    can_decide: bool,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_decide: Callback<DecisionRequest>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    {can_decide.then(|| view! { <th class=TH>"Employee"</th> })}
                    <th class=TH>"Start"</th>
                    <th class=TH>"End"</th>
                    <th class=TH>"Reason"</th>
                    <th class=TH>"Status"</th>
                    <th class=TH>"Approver"</th>
                    {can_decide.then(|| view! { <th class=TH>"Action"</th> })}
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| {
                        let decidable = can_decide && is_pending(&row.status);
                        view! {
                            <tr>
                                {can_decide.then(|| view! { <td class=TD>{row.issuer.clone().unwrap_or_else(|| "-".into())}</td> })}
                                <td class=TD>{format_date(&row.start_date)}</td>
                                <td class=TD>{format_date(&row.end_date)}</td>
                                <td class="px-4 py-3 text-sm text-fg">{row.description.clone().unwrap_or_default()}</td>
                                <td class=TD><StatusBadge status=row.status.clone() /></td>
                                <td class=TD>{row.approver.clone().unwrap_or_else(|| "-".into())}</td>
                                {can_decide.then(|| view! {
                                    <td class=TD>
                                        {decidable.then(|| view! {
                                            <DecisionButtons id=row.id pending=pending on_decide=on_decide />
                                        })}
                                    </td>
                                })}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
