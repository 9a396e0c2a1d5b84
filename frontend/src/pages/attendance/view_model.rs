use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Attendance, ListQuery, PageResponse, Role},
    components::result_dialog::ResultMessage,
    pages::list_state::PagedListState,
    state::session::use_session,
};

use super::{
    repository,
    utils::{
        build_clock_request, current_position, has_break_left, AttendancePhase, ClockKind,
    },
};

pub fn clock_result_message(result: &Result<ClockKind, ApiError>) -> ResultMessage {
    match result {
        Ok(kind) => ResultMessage::success(kind.success_message()),
        Err(err) => ResultMessage::failure(err.message.clone()),
    }
}

fn apply_optional_clock_result(
    result: Option<Result<ClockKind, ApiError>>,
    dialog: RwSignal<Option<ResultMessage>>,
) {
    if let Some(result) = result {
        if let Err(err) = &result {
            log::error!("clock event failed: {}", err);
        }
        dialog.set(Some(clock_result_message(&result)));
    }
}

#[derive(Clone, Copy)]
pub struct DailyAttendanceViewModel {
    pub today_resource: Resource<u32, Result<Option<Attendance>, ApiError>>,
    pub clock_action: Action<ClockKind, Result<ClockKind, ApiError>>,
    pub result: RwSignal<Option<ResultMessage>>,
    reload: RwSignal<u32>,
}

impl DailyAttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let reload = create_rw_signal(0u32);
        let result = create_rw_signal(None::<ResultMessage>);

        let api_today = api.clone();
        let today_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_today.clone();
                async move { repository::fetch_today(&api).await }
            },
        );

        let clock_action = create_action(move |kind: &ClockKind| {
            let api = api.clone();
            let kind = *kind;
            async move {
                let position = current_position().await;
                let request = build_clock_request(position);
                repository::submit_clock(&api, kind, &request)
                    .await
                    .map(|_| kind)
            }
        });

        create_effect(move |_| {
            apply_optional_clock_result(clock_action.value().get(), result);
        });

        Self {
            today_resource,
            clock_action,
            result,
            reload,
        }
    }

    pub fn phase(&self) -> Signal<AttendancePhase> {
        let today_resource = self.today_resource;
        Signal::derive(move || {
            let today = today_resource.get().and_then(Result::ok).flatten();
            AttendancePhase::from_attendance(today.as_ref())
        })
    }

    /// Break quota of the signed-in user's store.
    pub fn break_left(&self) -> Signal<bool> {
        let (session, _) = use_session();
        Signal::derive(move || {
            session.with(|state| {
                has_break_left(state.user.as_ref().and_then(|user| user.store.as_ref()))
            })
        })
    }

    /// Dismissing the result dialog refetches today's record.
    pub fn on_result_close(&self) -> Callback<()> {
        let reload = self.reload;
        Callback::new(move |_: ()| reload.update(|value| *value = value.wrapping_add(1)))
    }
}

pub fn use_daily_attendance_view_model() -> DailyAttendanceViewModel {
    DailyAttendanceViewModel::new()
}

#[derive(Clone, Copy)]
pub struct AttendanceHistoryViewModel {
    pub list: PagedListState,
    pub role: Signal<Option<Role>>,
    pub history_resource:
        Resource<((ListQuery, u32), Option<Role>), Result<PageResponse<Attendance>, ApiError>>,
}

impl AttendanceHistoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let role = Signal::derive(move || session.with(|state| state.role()));
        let list = PagedListState::default();

        let history_resource = create_resource(
            move || (list.source(), role.get()),
            move |((query, _), role)| {
                let api = api.clone();
                async move { repository::fetch_history(&api, role, &query).await }
            },
        );

        Self {
            list,
            role,
            history_resource,
        }
    }

    pub fn shows_employee_column(&self) -> Signal<bool> {
        let role = self.role;
        Signal::derive(move || role.get() == Some(Role::Admin))
    }
}

pub fn use_attendance_history_view_model() -> AttendanceHistoryViewModel {
    AttendanceHistoryViewModel::new()
}
