//! Node identifiers backed by a global string interner.
//!
//! Flowchart sources mention the same node id many times (declarations,
//! edge endpoints, bare references). [`Id`] interns each distinct spelling
//! once so that ids are `Copy` and compare in constant time.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for node ids.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`, so ids may be created and resolved from any thread.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// A case-sensitive node identifier taken verbatim from the source text.
///
/// # Examples
///
/// ```
/// use drawmaid_core::identifier::Id;
///
/// let start = Id::new("Start");
/// assert_eq!(start, Id::new("Start"));
/// assert_ne!(start, Id::new("start"));
/// assert_eq!(start.to_string(), "Start");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its textual spelling.
    ///
    /// Interning the same spelling twice yields equal ids.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns an owned copy of the identifier text.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_owned()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Resolve into an owned string first so the lock is not held while
        // the formatter runs.
        let name = self.as_string();
        f.write_str(&name)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        interner()
            .resolve(self.0)
            .is_some_and(|name| name == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns_same_spelling() {
        let a1 = Id::new("A");
        let a2 = Id::new("A");
        let b = Id::new("B");

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Id::new("node"), Id::new("Node"));
    }

    #[test]
    fn test_display_and_as_string() {
        let id = Id::new("load_balancer");
        assert_eq!(format!("{id}"), "load_balancer");
        assert_eq!(id.as_string(), "load_balancer");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Decision");

        assert!(id == "Decision");
        assert!(id != "decision");

        let name = String::from("Decision");
        assert!(id == name.as_str());
    }

    #[test]
    fn test_from_str_slice() {
        let id: Id = "server_1".into();
        assert_eq!(id, Id::new("server_1"));
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("A"), 1);
        map.insert(Id::new("B"), 2);

        assert_eq!(map.get(&Id::new("A")), Some(&1));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unicode_ids() {
        let id = Id::new("nœud");
        assert_eq!(id, "nœud");
    }
}
