/// Paging and date filter shared by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start_date: Option<String>, end_date: Option<String>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(v) = self.start_date.as_ref().filter(|v| !v.is_empty()) {
            params.push(("startDate", v.clone()));
        }
        if let Some(v) = self.end_date.as_ref().filter(|v| !v.is_empty()) {
            params.push(("endDate", v.clone()));
        }
        params
    }
}
