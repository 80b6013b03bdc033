use crate::{Category, ErrorKind, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_text: String,
    pub page: u32,
    pub page_size: u32,
    pub last_page: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub selected_types: Vec<Category>,
    pub categories: Vec<CategoryOption>,
    pub rows: Vec<RecordRowView>,
    pub total_count: u64,
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub category: Category,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    /// Title split by the current search text.
    pub title: Vec<Segment>,
    pub type_id: String,
}
