use leptos::*;

use crate::{
    api::{
        ApiClient, ApiError, ListQuery, OvertimeApplication, OvertimeApplicationRequest,
        PageResponse, Role,
    },
    components::result_dialog::ResultMessage,
    pages::{approval::DecisionRequest, list_state::PagedListState},
    state::session::use_session,
};

use super::{repository, utils::OvertimeFormState};

fn apply_optional_submit_result(
    result: Option<Result<OvertimeApplication, ApiError>>,
    dialog: RwSignal<Option<ResultMessage>>,
    form: OvertimeFormState,
) {
    if let Some(result) = result {
        match &result {
            Ok(_) => form.reset(),
            Err(err) => log::error!("overtime application failed: {}", err),
        }
        dialog.set(Some(ResultMessage::from_result(
            &result,
            "Overtime application submitted",
        )));
    }
}

fn apply_optional_decision_result(
    result: Option<(DecisionRequest, Result<OvertimeApplication, ApiError>)>,
    dialog: RwSignal<Option<ResultMessage>>,
) {
    if let Some((request, result)) = result {
        if let Err(err) = &result {
            log::error!("overtime decision for {} failed: {}", request.id, err);
        }
        let success = request.decision.success_message("Overtime application");
        dialog.set(Some(ResultMessage::from_result(&result, &success)));
    }
}

#[derive(Clone, Copy)]
pub struct OvertimeViewModel {
    pub list: PagedListState,
    pub role: Signal<Option<Role>>,
    pub form: OvertimeFormState,
    pub result: RwSignal<Option<ResultMessage>>,
    pub overtimes_resource: Resource<
        ((ListQuery, u32), Option<Role>),
        Result<PageResponse<OvertimeApplication>, ApiError>,
    >,
    pub submit_action: Action<OvertimeApplicationRequest, Result<OvertimeApplication, ApiError>>,
    pub decision_action:
        Action<DecisionRequest, (DecisionRequest, Result<OvertimeApplication, ApiError>)>,
}

impl OvertimeViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));
        let list = PagedListState::default();
        let form = OvertimeFormState::default();
        let result = create_rw_signal(None::<ResultMessage>);

        let api_list = api.clone();
        let overtimes_resource = create_resource(
            move || (list.source(), role.get()),
            move |((query, _), role)| {
                let api = api_list.clone();
                async move { repository::fetch_overtimes(&api, role, &query).await }
            },
        );

        let api_submit = api.clone();
        let submit_action = create_action(move |payload: &OvertimeApplicationRequest| {
            let api = api_submit.clone();
            let payload = payload.clone();
            async move { repository::submit_overtime(&api, &payload).await }
        });

        let decision_action = create_action(move |request: &DecisionRequest| {
            let api = api.clone();
            let request = *request;
            async move { (request, repository::decide_overtime(&api, request).await) }
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
            overtimes_resource,
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

pub fn use_overtime_view_model() -> OvertimeViewModel {
    OvertimeViewModel::new()
}
