use std::fmt;

/// Question categories known to the browser.
///
/// The declaration order is the canonical order used when the selected set is
/// normalized into a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Anagram,
    ReadAlong,
    Mcq,
    ContentOnly,
}

/// Static category table, in canonical order.
pub const CATEGORIES: [Category; 4] = [
    Category::Anagram,
    Category::ReadAlong,
    Category::Mcq,
    Category::ContentOnly,
];

impl Category {
    /// Wire identifier sent in the `types` query parameter.
    pub const fn id(self) -> &'static str {
        match self {
            Category::Anagram => "ANAGRAM",
            Category::ReadAlong => "READ_ALONG",
            Category::Mcq => "MCQ",
            Category::ContentOnly => "CONTENT_ONLY",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Anagram => "Anagram",
            Category::ReadAlong => "Read Along",
            Category::Mcq => "MCQ",
            Category::ContentOnly => "Content Only",
        }
    }

    /// Looks up a category by its wire identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        CATEGORIES.into_iter().find(|category| category.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
