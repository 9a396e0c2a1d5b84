use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, LeaveApplicationRequest};

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.description.set(String::new());
    }

    pub fn to_payload(&self) -> Result<LeaveApplicationRequest, ApiError> {
        let start = parse_date(&self.start_date.get(), "Enter a start date.")?;
        let end = parse_date(&self.end_date.get(), "Enter an end date.")?;
        if end < start {
            return Err(ApiError::validation(
                "The end date cannot be earlier than the start date.",
            ));
        }
        let description = self.description.get().trim().to_string();
        if description.is_empty() {
            return Err(ApiError::validation("Describe the reason for leave."));
        }
        Ok(LeaveApplicationRequest {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            description,
        })
    }
}

pub(crate) fn parse_date(raw: &str, message: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(message))
}
