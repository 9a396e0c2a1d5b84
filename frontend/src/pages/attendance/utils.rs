use crate::{
    api::{Attendance, ClockRequest, OwnedStore},
    utils::time::local_iso_now,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockKind {
    ClockIn,
    BreakIn,
    BreakOut,
    ClockOut,
}

impl ClockKind {
    pub const ALL: [ClockKind; 4] = [
        ClockKind::ClockIn,
        ClockKind::BreakIn,
        ClockKind::BreakOut,
        ClockKind::ClockOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClockKind::ClockIn => "Clock In",
            ClockKind::BreakIn => "Start Break",
            ClockKind::BreakOut => "End Break",
            ClockKind::ClockOut => "Clock Out",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ClockKind::ClockIn => "fa-right-to-bracket",
            ClockKind::BreakIn => "fa-mug-hot",
            ClockKind::BreakOut => "fa-person-walking-arrow-right",
            ClockKind::ClockOut => "fa-right-from-bracket",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ClockKind::ClockIn => "Clock in recorded",
            ClockKind::BreakIn => "Break started",
            ClockKind::BreakOut => "Break ended",
            ClockKind::ClockOut => "Clock out recorded",
        }
    }
}

/// Where today's attendance stands, derived from the recorded timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendancePhase {
    NotStarted,
    Working,
    OnBreak,
    BackFromBreak,
    Finished,
}

impl AttendancePhase {
    pub fn from_attendance(attendance: Option<&Attendance>) -> Self {
        let Some(attendance) = attendance.filter(|a| a.clock_in.is_some()) else {
            return AttendancePhase::NotStarted;
        };
        if attendance.clock_out.is_some() {
            return AttendancePhase::Finished;
        }
        match (&attendance.break_in, &attendance.break_out) {
            (Some(_), None) => AttendancePhase::OnBreak,
            (Some(_), Some(_)) => AttendancePhase::BackFromBreak,
            _ => AttendancePhase::Working,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendancePhase::NotStarted => "Not clocked in",
            AttendancePhase::Working | AttendancePhase::BackFromBreak => "Working",
            AttendancePhase::OnBreak => "On break",
            AttendancePhase::Finished => "Clocked out",
        }
    }

    /// Clocking out is blocked while on break. After a break another one may
    /// start only while `break_left` holds; the backend has the final say.
    pub fn allows(self, kind: ClockKind, break_left: bool) -> bool {
        match (self, kind) {
            (AttendancePhase::NotStarted, ClockKind::ClockIn)
            | (AttendancePhase::Working, ClockKind::BreakIn)
            | (AttendancePhase::Working, ClockKind::ClockOut)
            | (AttendancePhase::OnBreak, ClockKind::BreakOut)
            | (AttendancePhase::BackFromBreak, ClockKind::ClockOut) => true,
            (AttendancePhase::BackFromBreak, ClockKind::BreakIn) => break_left,
            _ => false,
        }
    }
}

/// Whether the store's break quota has room for another break. An unknown
/// store leaves the decision to the backend.
pub fn has_break_left(store: Option<&OwnedStore>) -> bool {
    store.map_or(true, |store| store.current_break < store.max_break)
}

pub fn build_clock_request(position: Option<(f64, f64)>) -> ClockRequest {
    ClockRequest {
        timestamp: local_iso_now(),
        latitude: position.map(|(lat, _)| lat),
        longitude: position.map(|(_, long)| long),
    }
}

/// Longest wait for a device position before clocking without one.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

/// Device position for the store geofence check; `None` when the browser
/// has no geolocation or the user declines.
#[cfg(target_arch = "wasm32")]
pub async fn current_position() -> Option<(f64, f64)> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window()?;
    let geolocation = window.navigator().geolocation().ok()?;
    let options = web_sys::PositionOptions::new();
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);
    let lookup = js_sys::Promise::new(&mut |resolve, reject| {
        if geolocation
            .get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options)
            .is_err()
        {
            let _ = reject.call0(&JsValue::NULL);
        }
    });
    // The options timeout does not run while a permission prompt is unanswered.
    let deadline = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            &resolve,
            GEOLOCATION_TIMEOUT_MS as i32,
        );
    });
    let first = js_sys::Promise::race(&js_sys::Array::of2(&lookup, &deadline));
    match wasm_bindgen_futures::JsFuture::from(first).await {
        Ok(value) => match value.dyn_into::<web_sys::GeolocationPosition>() {
            Ok(position) => {
                let coords = position.coords();
                Some((coords.latitude(), coords.longitude()))
            }
            Err(_) => {
                log::warn!(
                    "no position after {} ms, sending clock event without position",
                    GEOLOCATION_TIMEOUT_MS
                );
                None
            }
        },
        Err(_) => {
            log::warn!("geolocation unavailable, sending clock event without position");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position() -> Option<(f64, f64)> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendance(
        clock_in: Option<&str>,
        break_in: Option<&str>,
        break_out: Option<&str>,
        clock_out: Option<&str>,
    ) -> Attendance {
        Attendance {
            id: 1,
            clock_in: clock_in.map(Into::into),
            clock_out: clock_out.map(Into::into),
            break_in: break_in.map(Into::into),
            break_out: break_out.map(Into::into),
            status: "PRESENT".into(),
            attendance_type: None,
            late_minutes: 0,
            profile: None,
            overtime: None,
        }
    }

    #[test]
    fn phase_follows_recorded_events() {
        assert_eq!(AttendancePhase::from_attendance(None), AttendancePhase::NotStarted);
        let t = Some("2025-01-02T08:00:00");
        assert_eq!(
            AttendancePhase::from_attendance(Some(&attendance(None, None, None, None))),
            AttendancePhase::NotStarted
        );
        assert_eq!(
            AttendancePhase::from_attendance(Some(&attendance(t, None, None, None))),
            AttendancePhase::Working
        );
        assert_eq!(
            AttendancePhase::from_attendance(Some(&attendance(t, t, None, None))),
            AttendancePhase::OnBreak
        );
        assert_eq!(
            AttendancePhase::from_attendance(Some(&attendance(t, t, t, None))),
            AttendancePhase::BackFromBreak
        );
        assert_eq!(
            AttendancePhase::from_attendance(Some(&attendance(t, t, t, t))),
            AttendancePhase::Finished
        );
    }

    #[test]
    fn only_the_next_step_is_allowed() {
        let allowed = |phase: AttendancePhase| -> Vec<ClockKind> {
            ClockKind::ALL
                .into_iter()
                .filter(|k| phase.allows(*k, false))
                .collect()
        };
        assert_eq!(allowed(AttendancePhase::NotStarted), vec![ClockKind::ClockIn]);
        assert_eq!(
            allowed(AttendancePhase::Working),
            vec![ClockKind::BreakIn, ClockKind::ClockOut]
        );
        assert_eq!(allowed(AttendancePhase::OnBreak), vec![ClockKind::BreakOut]);
        assert_eq!(allowed(AttendancePhase::BackFromBreak), vec![ClockKind::ClockOut]);
        assert!(allowed(AttendancePhase::Finished).is_empty());
    }

    fn store_with_breaks(max_break: i64, current_break: i64) -> OwnedStore {
        let mut store: OwnedStore =
            serde_json::from_value(serde_json::json!({
                "id": 1,
                "name": "Toko Kemang",
                "latitude": -6.26,
                "longitude": 106.81,
                "radius": 150.0,
                "breakDuration": 60,
                "maxBreak": 1,
                "currentBreak": 0,
                "lateClockInPenaltyAmount": 0.0,
                "lateBreakPenaltyAmount": 0.0,
                "overtimeMultiplier": 1.5
            }))
            .unwrap();
        store.max_break = max_break;
        store.current_break = current_break;
        store
    }

    #[test]
    fn second_break_follows_store_quota() {
        let back = AttendancePhase::BackFromBreak;

        let roomy = store_with_breaks(2, 1);
        assert!(has_break_left(Some(&roomy)));
        assert!(back.allows(ClockKind::BreakIn, has_break_left(Some(&roomy))));

        let single = store_with_breaks(1, 1);
        assert!(!has_break_left(Some(&single)));
        assert!(!back.allows(ClockKind::BreakIn, has_break_left(Some(&single))));

        assert!(has_break_left(None));
        assert!(back.allows(ClockKind::ClockOut, false));
        assert!(!AttendancePhase::OnBreak.allows(ClockKind::BreakIn, true));
    }

    #[test]
    fn clock_request_carries_position() {
        let request = build_clock_request(Some((-6.2, 106.8)));
        assert_eq!(request.latitude, Some(-6.2));
        assert_eq!(request.longitude, Some(106.8));
        assert_eq!(request.timestamp.len(), "2025-01-02T08:30:15.000".len());
        assert!(build_clock_request(None).latitude.is_none());
    }
}
