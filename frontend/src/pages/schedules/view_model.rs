use leptos::*;

use crate::api::{ApiClient, ApiError, Schedule};

pub fn tolerance_label(minutes: i64) -> String {
    match minutes {
        m if m <= 0 => "No tolerance".to_string(),
        1 => "1 minute".to_string(),
        m => format!("{} minutes", m),
    }
}

#[derive(Clone, Copy)]
pub struct SchedulesViewModel {
    pub schedules_resource: Resource<(), Result<Vec<Schedule>, ApiError>>,
}

impl SchedulesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let schedules_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { api.list_schedules().await }
            },
        );
        Self { schedules_resource }
    }
}

pub fn use_schedules_view_model() -> SchedulesViewModel {
    SchedulesViewModel::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_label_pluralizes() {
        assert_eq!(tolerance_label(0), "No tolerance");
        assert_eq!(tolerance_label(1), "1 minute");
        assert_eq!(tolerance_label(15), "15 minutes");
    }
}
