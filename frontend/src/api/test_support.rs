use crate::api::{ApiClient, MemoryTokenStore};
use httpmock::MockServer;
use serde_json::{json, Value};
use std::rc::Rc;

pub fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"), Rc::new(MemoryTokenStore::new(token)))
}

pub fn page_json(content: Vec<Value>, total_elements: u64, total_pages: u32, number: u32) -> Value {
    json!({
        "content": content,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "number": number,
        "size": 10
    })
}

pub fn attendance_json(id: i64) -> Value {
    json!({
        "id": id,
        "clockIn": "2025-01-02T08:00:00",
        "clockOut": null,
        "breakIn": null,
        "breakOut": null,
        "status": "PRESENT",
        "type": "REGULAR",
        "lateMinutes": 0,
        "profile": { "id": 1, "name": "Siti Rahma" }
    })
}

pub fn leave_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "startDate": "2025-02-10",
        "endDate": "2025-02-12",
        "description": "Family event",
        "issuer": "siti",
        "approver": null
    })
}

pub fn overtime_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "status": status,
        "date": "2025-02-11",
        "startTime": "17:00",
        "endTime": "20:00",
        "description": "Stock opname",
        "issuer": "siti",
        "approver": null
    })
}

pub fn store_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Toko Kemang",
        "location": "Jakarta Selatan",
        "latitude": -6.26,
        "longitude": 106.81,
        "radius": 150.0,
        "breakDuration": 60,
        "maxBreak": 2,
        "currentBreak": 0,
        "lateClockInPenaltyAmount": 25000.0,
        "lateBreakPenaltyAmount": 10000.0,
        "overtimeMultiplier": 1.5
    })
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": 9,
        "username": "siti",
        "email": "siti@example.com",
        "role": role,
        "isActive": true,
        "profile": { "id": 1, "name": "Siti Rahma", "gender": "FEMALE" }
    })
}
