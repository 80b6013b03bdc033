use std::collections::BTreeSet;

use crate::Category;

/// Multi-select filter over the static category table.
///
/// Membership is a set; iteration always yields categories in table order,
/// which is the normalized form sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeFilter {
    selected: BTreeSet<Category>,
}

impl TypeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `category` if absent, removes it if present.
    /// Returns `true` when the category is selected afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.selected.remove(&category) {
            false
        } else {
            self.selected.insert(category);
            true
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Selected categories in canonical order.
    pub fn normalized(&self) -> Vec<Category> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut filter = TypeFilter::new();
        filter.toggle(Category::Mcq);
        let before = filter.clone();

        assert!(filter.toggle(Category::Anagram));
        assert!(!filter.toggle(Category::Anagram));
        assert_eq!(filter, before);
    }

    #[test]
    fn normalized_ignores_insertion_order() {
        let mut a = TypeFilter::new();
        a.toggle(Category::ContentOnly);
        a.toggle(Category::Anagram);

        let mut b = TypeFilter::new();
        b.toggle(Category::Anagram);
        b.toggle(Category::ContentOnly);

        assert_eq!(a, b);
        assert_eq!(a.normalized(), vec![Category::Anagram, Category::ContentOnly]);
    }

    #[test]
    fn starts_empty() {
        let filter = TypeFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
        assert!(filter.normalized().is_empty());
    }
}
