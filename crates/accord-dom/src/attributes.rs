//! Element Attributes
//!
//! Ordered attribute list with case-insensitive name lookup.

use serde::Serialize;

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }

    /// Whether this is an `aria-*` attribute
    pub fn is_aria(&self) -> bool {
        self.name.starts_with("aria-")
    }
}

/// Attribute collection in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    items: Vec<Attr>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Raw attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Attribute value with surrounding whitespace removed
    pub fn get_trimmed(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim)
    }

    /// Lowercased, trimmed value, handy for enumerated attributes
    pub fn get_lower(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.trim().to_ascii_lowercase())
    }

    /// Check if attribute exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set attribute, replacing an existing value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let attr = Attr::new(name, value);
        match self.items.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => existing.value = attr.value,
            None => self.items.push(attr),
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let index = self.items.iter().position(|a| a.name.eq_ignore_ascii_case(name))?;
        Some(self.items.remove(index))
    }

    /// Iterate attributes in source order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.items.iter()
    }

    /// Iterate only `aria-*` attributes
    pub fn aria(&self) -> impl Iterator<Item = &Attr> {
        self.items.iter().filter(|a| a.is_aria())
    }

    /// Whitespace separated tokens of an attribute value
    pub fn tokens(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .map(|v| v.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut attrs = Attributes::new();
        attrs.set("ARIA-Label", "Close");
        assert_eq!(attrs.get("aria-label"), Some("Close"));
        assert!(attrs.has("Aria-Label"));
    }

    #[test]
    fn test_set_replaces() {
        let mut attrs: Attributes = [("id", "a"), ("class", "x")].into_iter().collect();
        attrs.set("id", "b");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some("b"));
        assert_eq!(attrs.remove("class").map(|a| a.value), Some("x".to_string()));
        assert!(!attrs.has("class"));
    }

    #[test]
    fn test_tokens_and_aria_filter() {
        let attrs: Attributes = [("aria-labelledby", "  a  b "), ("role", "button")]
            .into_iter()
            .collect();
        assert_eq!(attrs.tokens("aria-labelledby"), vec!["a", "b"]);
        assert_eq!(attrs.aria().count(), 1);
        assert!(attrs.tokens("missing").is_empty());
    }
}
