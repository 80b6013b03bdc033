use crate::{Category, TypeFilter};

pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Page sizes offered by the presentation layer. The query model itself
/// accepts any positive size.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 15];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page size must be a positive integer")]
    ZeroPageSize,
    #[error("page numbers start at 1")]
    ZeroPage,
}

/// Canonical search query. `page >= 1` always holds; every mutation other
/// than [`QueryState::set_page`] resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    page: u32,
    page_size: u32,
    types: TypeFilter,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            types: TypeFilter::new(),
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default query with a different initial page size.
    pub fn with_page_size(page_size: u32) -> Result<Self, QueryError> {
        let mut query = Self::default();
        query.set_page_size(page_size)?;
        Ok(query)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn types(&self) -> &TypeFilter {
        &self.types
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<(), QueryError> {
        if page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// Toggles `category` in the type filter and returns its new membership.
    pub fn toggle_type(&mut self, category: Category) -> bool {
        self.page = 1;
        self.types.toggle(category)
    }

    /// Explicit navigation. Upper-bound checks belong to the caller.
    pub fn set_page(&mut self, page: u32) -> Result<(), QueryError> {
        if page == 0 {
            return Err(QueryError::ZeroPage);
        }
        self.page = page;
        Ok(())
    }

    /// The normalized query that identifies a fetch.
    pub fn effective(&self) -> FetchRequest {
        FetchRequest {
            page: self.page,
            page_size: self.page_size,
            search: self.search_text.clone(),
            types: self.types.normalized(),
        }
    }
}

/// Effective query as handed to the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    /// Selected categories in canonical table order.
    pub types: Vec<Category>,
}

impl FetchRequest {
    /// Wire identifiers of the selected categories.
    pub fn type_ids(&self) -> Vec<&'static str> {
        self.types.iter().map(|category| category.id()).collect()
    }
}
