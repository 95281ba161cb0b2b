//! Koan registration
//!
//! A suite is an ordered set of uniquely named koans. Registration order is
//! the order koans are meant to be worked through, so it is also the only
//! order they ever run in.

use crate::error::{KoanResult, SuiteError};
use crate::koan::Koan;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered collection of koans
#[derive(Debug, Clone, Default)]
pub struct KoanSuite {
    koans: Vec<Koan>,
    names: HashSet<String>,
}

impl KoanSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a koan at the end of the suite.
    ///
    /// Fails with [`SuiteError::DuplicateName`] if a koan of that name already
    /// exists; the suite is left unchanged in that case.
    pub fn register<F>(&mut self, name: impl Into<String>, body: F) -> Result<(), SuiteError>
    where
        F: Fn() -> KoanResult + Send + Sync + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SuiteError::EmptyName);
        }
        if !self.names.insert(name.clone()) {
            return Err(SuiteError::DuplicateName(name));
        }
        self.koans.push(Koan::new(name, Arc::new(body)));
        Ok(())
    }

    /// Koans whose name contains `pattern`, in their original order
    pub fn filter(&self, pattern: &str) -> KoanSuite {
        let koans: Vec<Koan> = self
            .koans
            .iter()
            .filter(|k| k.name().contains(pattern))
            .cloned()
            .collect();
        let names = koans.iter().map(|k| k.name().to_string()).collect();
        KoanSuite { koans, names }
    }

    pub fn get(&self, name: &str) -> Option<&Koan> {
        self.koans.iter().find(|k| k.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.koans.iter().map(Koan::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Koan> {
        self.koans.iter()
    }

    pub fn len(&self) -> usize {
        self.koans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.koans.is_empty()
    }
}

impl<'a> IntoIterator for &'a KoanSuite {
    type Item = &'a Koan;
    type IntoIter = std::slice::Iter<'a, Koan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> KoanResult {
        Ok(())
    }

    #[test]
    fn test_register_preserves_order() {
        let mut suite = KoanSuite::new();
        suite.register("test_b", noop).unwrap();
        suite.register("test_a", noop).unwrap();
        suite.register("test_c", noop).unwrap();

        let names: Vec<_> = suite.names().collect();
        assert_eq!(names, vec!["test_b", "test_a", "test_c"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut suite = KoanSuite::new();
        suite.register("test_each", noop).unwrap();

        let err = suite.register("test_each", noop).unwrap_err();
        assert_eq!(err, SuiteError::DuplicateName("test_each".to_string()));
        assert_eq!(suite.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut suite = KoanSuite::new();
        assert_eq!(suite.register(" ", noop), Err(SuiteError::EmptyName));
        assert!(suite.is_empty());
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let mut suite = KoanSuite::new();
        suite.register("test_inject_sum", noop).unwrap();
        suite.register("test_map", noop).unwrap();
        suite.register("test_inject_product", noop).unwrap();

        let filtered = suite.filter("inject");
        let names: Vec<_> = filtered.names().collect();
        assert_eq!(names, vec!["test_inject_sum", "test_inject_product"]);
        assert!(filtered.get("test_map").is_none());
    }

    #[test]
    fn test_filtered_suite_still_rejects_duplicates() {
        let mut suite = KoanSuite::new();
        suite.register("test_map", noop).unwrap();

        let mut filtered = suite.filter("map");
        assert!(filtered.register("test_map", noop).is_err());
    }
}
