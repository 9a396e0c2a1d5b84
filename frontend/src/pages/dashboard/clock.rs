use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;
use leptos::*;

use crate::utils::{format::long_date, time::now_in_app_tz};

fn weekday_id(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// `Senin, 19 Oktober 2026`
pub fn clock_date_label(now: &DateTime<Tz>) -> String {
    format!("{}, {}", weekday_id(now.weekday()), long_date(now.date_naive()))
}

pub fn clock_time_label(now: &DateTime<Tz>) -> String {
    now.format("%H.%M.%S").to_string()
}

#[component]
pub fn Clock() -> impl IntoView {
    let (time, set_time) = create_signal(now_in_app_tz());

    // Dropping the interval with the component's scope cancels it.
    #[cfg(target_arch = "wasm32")]
    let _interval = store_value(gloo_timers::callback::Interval::new(1000, move || {
        set_time.set(now_in_app_tz());
    }));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse border-none shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90">{move || clock_date_label(&time.get())}</div>
                <div class="text-4xl font-bold tracking-wider font-mono">
                    {move || clock_time_label(&time.get())}
                </div>
                <div class="text-xs opacity-75">"WIB"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn labels_use_jakarta_wall_clock() {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 18, 18, 4, 5)
            .unwrap()
            .with_timezone(&crate::config::APP_TIME_ZONE);
        assert_eq!(clock_date_label(&now), "Senin, 19 Oktober 2026");
        assert_eq!(clock_time_label(&now), "01.04.05");
    }
}
