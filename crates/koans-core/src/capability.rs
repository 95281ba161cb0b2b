//! Static capability sets for iteration operations.
//!
//! Answers "does value V support operation O?" from a fixed table per type
//! rather than by inspecting methods at runtime. Names are rendered in the
//! configured [`NameStyle`] so koans can check membership in a method list.

use koans_config::NameStyle;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Lines};
use std::ops::{Range, RangeInclusive};

/// An iteration operation a collection may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Each,
    Collect,
    Map,
    Select,
    FindAll,
    Find,
    Inject,
    Reduce,
}

impl Capability {
    /// Every capability, in canonical order
    pub const ALL: [Capability; 8] = [
        Capability::Each,
        Capability::Collect,
        Capability::Map,
        Capability::Select,
        Capability::FindAll,
        Capability::Find,
        Capability::Inject,
        Capability::Reduce,
    ];

    /// Bare method name
    pub fn name(self) -> &'static str {
        match self {
            Capability::Each => "each",
            Capability::Collect => "collect",
            Capability::Map => "map",
            Capability::Select => "select",
            Capability::FindAll => "find_all",
            Capability::Find => "find",
            Capability::Inject => "inject",
            Capability::Reduce => "reduce",
        }
    }

    pub fn display_name(self, style: NameStyle) -> String {
        style.render(self.name())
    }

    /// The canonical operation behind an alias (`collect` is `map`,
    /// `find_all` is `select`, `reduce` is `inject`)
    pub fn canonical(self) -> Capability {
        match self {
            Capability::Collect => Capability::Map,
            Capability::FindAll => Capability::Select,
            Capability::Reduce => Capability::Inject,
            other => other,
        }
    }
}

/// Types with a known, fixed set of iteration capabilities
pub trait Iterable {
    fn capabilities(&self) -> &'static [Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Method names in the given style, in canonical order
    fn method_names(&self, style: NameStyle) -> Vec<String> {
        self.capabilities()
            .iter()
            .map(|c| c.display_name(style))
            .collect()
    }
}

/// Optional values iterate over zero or one element
const OPTIONAL: [Capability; 4] = [
    Capability::Each,
    Capability::Map,
    Capability::Select,
    Capability::Find,
];

impl<T> Iterable for Vec<T> {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl<T> Iterable for [T] {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl<T> Iterable for Range<T> {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl<T> Iterable for RangeInclusive<T> {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl Iterable for Lines<BufReader<File>> {
    fn capabilities(&self) -> &'static [Capability] {
        &Capability::ALL
    }
}

impl<T> Iterable for Option<T> {
    fn capabilities(&self) -> &'static [Capability] {
        &OPTIONAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrays_support_each() {
        let empty: Vec<i32> = Vec::new();
        assert!(empty.supports(Capability::Each));
        assert!([1, 2, 3].supports(Capability::Inject));
        assert!((1..=3).supports(Capability::Map));
    }

    #[test]
    fn test_option_has_no_inject() {
        assert!(Some(1).supports(Capability::Map));
        assert!(!Some(1).supports(Capability::Inject));
        assert!(!None::<i32>.supports(Capability::Reduce));
    }

    #[test]
    fn test_method_names_follow_style() {
        let v = vec![1];
        assert!(v
            .method_names(NameStyle::Symbol)
            .contains(&":each".to_string()));
        assert!(v
            .method_names(NameStyle::String)
            .contains(&"each".to_string()));
        assert!(!v
            .method_names(NameStyle::String)
            .contains(&":each".to_string()));
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(Capability::Collect.canonical(), Capability::Map);
        assert_eq!(Capability::FindAll.canonical(), Capability::Select);
        assert_eq!(Capability::Reduce.canonical(), Capability::Inject);
        assert_eq!(Capability::Each.canonical(), Capability::Each);
    }
}
