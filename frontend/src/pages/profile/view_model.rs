use leptos::*;

use crate::api::{ApiClient, ApiError, User};

pub fn gender_label(raw: Option<&str>) -> &'static str {
    match raw.map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("MALE") || value.eq_ignore_ascii_case("L") => {
            "Male"
        }
        Some(value)
            if value.eq_ignore_ascii_case("FEMALE") || value.eq_ignore_ascii_case("P") =>
        {
            "Female"
        }
        _ => "-",
    }
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub me_resource: Resource<(), Result<User, ApiError>>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let me_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { api.get_me().await }
            },
        );
        Self { me_resource }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    ProfileViewModel::new()
}
