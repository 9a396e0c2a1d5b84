use leptos::*;

use crate::{
    api::{ApiClient, ApiError, OwnedStore, StoreRequest},
    components::result_dialog::ResultMessage,
};

use super::{repository, utils::StoreFormState};

fn apply_optional_save_result(
    result: Option<Result<OwnedStore, ApiError>>,
    dialog: RwSignal<Option<ResultMessage>>,
    editing: RwSignal<Option<i64>>,
) {
    if let Some(result) = result {
        match &result {
            Ok(store) => {
                log::info!("store {} updated", store.id);
                editing.set(None);
            }
            Err(err) => log::error!("store update failed: {}", err),
        }
        dialog.set(Some(ResultMessage::from_result(&result, "Store settings saved")));
    }
}

#[derive(Clone, Copy)]
pub struct StoresViewModel {
    pub stores_resource: Resource<u32, Result<Vec<OwnedStore>, ApiError>>,
    pub editing: RwSignal<Option<i64>>,
    pub form: StoreFormState,
    pub result: RwSignal<Option<ResultMessage>>,
    pub save_action: Action<(i64, StoreRequest), Result<OwnedStore, ApiError>>,
    reload: RwSignal<u32>,
}

impl StoresViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let reload = create_rw_signal(0u32);
        let editing = create_rw_signal(None::<i64>);
        let form = StoreFormState::default();
        let result = create_rw_signal(None::<ResultMessage>);

        let api_list = api.clone();
        let stores_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_list.clone();
                async move { repository::fetch_stores(&api).await }
            },
        );

        let save_action = create_action(move |(id, request): &(i64, StoreRequest)| {
            let api = api.clone();
            let id = *id;
            let request = request.clone();
            async move { repository::save_store(&api, id, &request).await }
        });

        create_effect(move |_| {
            apply_optional_save_result(save_action.value().get(), result, editing);
        });

        Self {
            stores_resource,
            editing,
            form,
            result,
            save_action,
            reload,
        }
    }

    pub fn start_edit(&self, store: &OwnedStore) {
        self.form.load(store);
        self.editing.set(Some(store.id));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    pub fn save(&self) {
        let Some(id) = self.editing.get_untracked() else {
            return;
        };
        match self.form.to_request() {
            Ok(request) => self.save_action.dispatch((id, request)),
            Err(err) => self.result.set(Some(ResultMessage::failure(err.message))),
        }
    }

    pub fn on_result_close(&self) -> Callback<()> {
        let reload = self.reload;
        Callback::new(move |_: ()| reload.update(|value| *value = value.wrapping_add(1)))
    }
}

pub fn use_stores_view_model() -> StoresViewModel {
    StoresViewModel::new()
}
