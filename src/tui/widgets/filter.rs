//! Type-to-filter query for the selector.

/// Case-insensitive substring filter over entry names.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    text: String,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.extend(c.to_lowercase());
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empty query matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.text.is_empty() || name.to_lowercase().contains(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> FilterQuery {
        let mut q = FilterQuery::new();
        text.chars().for_each(|c| q.push(c));
        q
    }

    #[test]
    fn test_empty_matches_all() {
        let q = FilterQuery::new();
        assert!(q.is_empty());
        assert!(q.matches("bulbasaur"));
        assert!(q.matches(""));
    }

    #[test]
    fn test_substring_case_insensitive() {
        let q = query("CHAR");
        assert_eq!(q.text(), "char");
        assert!(q.matches("charmander"));
        assert!(q.matches("Charizard"));
        assert!(!q.matches("squirtle"));
    }

    #[test]
    fn test_pop_and_clear() {
        let mut q = query("pik");
        q.pop();
        assert_eq!(q.text(), "pi");
        q.pop();
        q.pop();
        q.pop();
        assert!(q.is_empty());

        let mut q = query("mew");
        q.clear();
        assert!(q.is_empty());
    }
}
