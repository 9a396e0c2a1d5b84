use leptos::*;

use crate::{
    api::{ApiClient, ApiError, LeaveApplication, LeaveApplicationRequest, ListQuery, PageResponse, Role},
    components::result_dialog::ResultMessage,
    pages::{
        approval::DecisionRequest,
        list_state::PagedListState,
    },
    state::session::use_session,
};

use super::{repository, utils::LeaveFormState};

fn apply_optional_submit_result(
    result: Option<Result<LeaveApplication, ApiError>>,
    dialog: RwSignal<Option<ResultMessage>>,
    form: LeaveFormState,
) {
    if let Some(result) = result {
        match &result {
            Ok(_) => form.reset(),
            Err(err) => log::error!("leave application failed: {}", err),
        }
        dialog.set(Some(ResultMessage::from_result(&result, "Leave application submitted")));
    }
}

fn apply_optional_decision_result(
    result: Option<(DecisionRequest, Result<LeaveApplication, ApiError>)>,
    dialog: RwSignal<Option<ResultMessage>>,
) {
    if let Some((request, result)) = result {
        if let Err(err) = &result {
            log::error!("leave decision for {} failed: {}", request.id, err);
        }
        let success = request.decision.success_message("Leave application");
        dialog.set(Some(ResultMessage::from_result(&result, &success)));
    }
}

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub list: PagedListState,
    pub role: Signal<Option<Role>>,
    pub form: LeaveFormState,
    pub result: RwSignal<Option<ResultMessage>>,
    pub leaves_resource:
        Resource<((ListQuery, u32), Option<Role>), Result<PageResponse<LeaveApplication>, ApiError>>,
    pub submit_action: Action<LeaveApplicationRequest, Result<LeaveApplication, ApiError>>,
    pub decision_action:
        Action<DecisionRequest, (DecisionRequest, Result<LeaveApplication, ApiError>)>,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));
        let list = PagedListState::default();
        let form = LeaveFormState::default();
        let result = create_rw_signal(None::<ResultMessage>);

        let api_list = api.clone();
        let leaves_resource = create_resource(
            move || (list.source(), role.get()),
            move |((query, _), role)| {
                let api = api_list.clone();
                async move { repository::fetch_leaves(&api, role, &query).await }
            },
        );

        let api_submit = api.clone();
        let submit_action = create_action(move |payload: &LeaveApplicationRequest| {
            let api = api_submit.clone();
            let payload = payload.clone();
            async move { repository::submit_leave(&api, &payload).await }
        });

        let decision_action = create_action(move |request: &DecisionRequest| {
            let api = api.clone();
            let request = *request;
            async move { (request, repository::decide_leave(&api, request).await) }
        });

        create_effect(move |_| {
            apply_optional_submit_result(submit_action.value().get(), result, form);
        });
        create_effect(move |_| {
            apply_optional_decision_result(decision_action.value().get(), result);
        });

        Self {
            list,
            role,
            form,
            result,
            leaves_resource,
            submit_action,
            decision_action,
        }
    }

    pub fn can_apply(&self) -> Signal<bool> {
        let role = self.role;
        Signal::derive(move || role.get() == Some(Role::Employee))
    }

    pub fn can_decide(&self) -> Signal<bool> {
        let role = self.role;
        Signal::derive(move || role.get() == Some(Role::Admin))
    }

    /// Validates the form and dispatches; validation failures go straight to
    /// the result dialog.
    pub fn submit(&self) {
        match self.form.to_payload() {
            Ok(payload) => self.submit_action.dispatch(payload),
            Err(err) => self.result.set(Some(ResultMessage::failure(err.message))),
        }
    }

    pub fn on_result_close(&self) -> Callback<()> {
        let list = self.list;
        Callback::new(move |_: ()| list.refresh())
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    LeaveViewModel::new()
}
