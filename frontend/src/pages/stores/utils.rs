use leptos::*;

use crate::api::{ApiError, OwnedStore, StoreRequest};

/// Text inputs backing the store editor; numbers are parsed on save.
#[derive(Clone, Copy)]
pub struct StoreFormState {
    pub name: RwSignal<String>,
    pub location: RwSignal<String>,
    pub latitude: RwSignal<String>,
    pub longitude: RwSignal<String>,
    pub radius: RwSignal<String>,
    pub break_duration: RwSignal<String>,
    pub max_break: RwSignal<String>,
    pub late_clock_in_penalty: RwSignal<String>,
    pub late_break_penalty: RwSignal<String>,
    pub overtime_multiplier: RwSignal<String>,
}

impl Default for StoreFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            location: create_rw_signal(String::new()),
            latitude: create_rw_signal(String::new()),
            longitude: create_rw_signal(String::new()),
            radius: create_rw_signal(String::new()),
            break_duration: create_rw_signal(String::new()),
            max_break: create_rw_signal(String::new()),
            late_clock_in_penalty: create_rw_signal(String::new()),
            late_break_penalty: create_rw_signal(String::new()),
            overtime_multiplier: create_rw_signal(String::new()),
        }
    }
}

impl StoreFormState {
    pub fn load(&self, store: &OwnedStore) {
        self.name.set(store.name.clone());
        self.location.set(store.location.clone().unwrap_or_default());
        self.latitude.set(store.latitude.to_string());
        self.longitude.set(store.longitude.to_string());
        self.radius.set(store.radius.to_string());
        self.break_duration.set(store.break_duration.to_string());
        self.max_break.set(store.max_break.to_string());
        self.late_clock_in_penalty
            .set(store.late_clock_in_penalty_amount.to_string());
        self.late_break_penalty
            .set(store.late_break_penalty_amount.to_string());
        self.overtime_multiplier
            .set(store.overtime_multiplier.to_string());
    }

    pub fn to_request(&self) -> Result<StoreRequest, ApiError> {
        let name = self.name.get().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("Store name is required."));
        }
        let location = self.location.get().trim().to_string();

        let latitude = parse_decimal(&self.latitude.get(), "Latitude")?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ApiError::validation("Latitude must be between -90 and 90."));
        }
        let longitude = parse_decimal(&self.longitude.get(), "Longitude")?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ApiError::validation(
                "Longitude must be between -180 and 180.",
            ));
        }
        let radius = parse_decimal(&self.radius.get(), "Radius")?;
        if radius <= 0.0 {
            return Err(ApiError::validation("Radius must be greater than zero."));
        }

        Ok(StoreRequest {
            name,
            location: (!location.is_empty()).then_some(location),
            latitude,
            longitude,
            radius,
            break_duration: parse_count(&self.break_duration.get(), "Break duration")?,
            max_break: parse_count(&self.max_break.get(), "Maximum breaks")?,
            late_clock_in_penalty_amount: non_negative(
                parse_decimal(&self.late_clock_in_penalty.get(), "Late clock-in penalty")?,
                "Late clock-in penalty",
            )?,
            late_break_penalty_amount: non_negative(
                parse_decimal(&self.late_break_penalty.get(), "Late break penalty")?,
                "Late break penalty",
            )?,
            overtime_multiplier: non_negative(
                parse_decimal(&self.overtime_multiplier.get(), "Overtime multiplier")?,
                "Overtime multiplier",
            )?,
        })
    }
}

fn parse_decimal(raw: &str, field: &str) -> Result<f64, ApiError> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ApiError::validation(format!("{} must be a number.", field)))
}

fn parse_count(raw: &str, field: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value >= 0)
        .ok_or_else(|| ApiError::validation(format!("{} must be a whole number.", field)))
}

fn non_negative(value: f64, field: &str) -> Result<f64, ApiError> {
    if value < 0.0 {
        Err(ApiError::validation(format!("{} cannot be negative.", field)))
    } else {
        Ok(value)
    }
}
