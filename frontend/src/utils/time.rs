use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config::APP_TIME_ZONE;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIME_ZONE)
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Wall-clock time in Jakarta as an offset-less ISO string with millisecond
/// precision, the format the backend expects for clock events.
pub fn local_iso_string(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&APP_TIME_ZONE)
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

pub fn local_iso_now() -> String {
    local_iso_string(Utc::now())
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}
