use leptos::*;

use crate::{
    api::{ApiError, OvertimeApplicationRequest},
    pages::leave::utils::parse_date,
};

#[derive(Clone, Copy)]
pub struct OvertimeFormState {
    date: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for OvertimeFormState {
    fn default() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl OvertimeFormState {
    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.date.set(String::new());
        self.description.set(String::new());
    }

    pub fn to_payload(&self) -> Result<OvertimeApplicationRequest, ApiError> {
        let date = parse_date(&self.date.get(), "Enter the overtime date.")?;
        let description = self.description.get().trim().to_string();
        if description.is_empty() {
            return Err(ApiError::validation("Describe the overtime work."));
        }
        Ok(OvertimeApplicationRequest {
            date: date.format("%Y-%m-%d").to_string(),
            description,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn payload_requires_date_and_description() {
        with_runtime(|| {
            let state = OvertimeFormState::default();
            let err = state.to_payload().unwrap_err();
            assert_eq!(err.message, "Enter the overtime date.");

            state.date_signal().set("2025-03-03".into());
            assert_eq!(
                state.to_payload().unwrap_err().message,
                "Describe the overtime work."
            );

            state.description_signal().set("Stock opname".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.date, "2025-03-03");
            assert_eq!(payload.description, "Stock opname");
        });
    }

    #[test]
    fn malformed_date_is_rejected() {
        with_runtime(|| {
            let state = OvertimeFormState::default();
            state.date_signal().set("03/03/2025".into());
            state.description_signal().set("x".into());
            assert_eq!(state.to_payload().unwrap_err().code, "VALIDATION_ERROR");
        });
    }
}
