//! Session variable store.
//!
//! Variable names are case-sensitive and unique.  The store is mutated only
//! by `define`; there is no deletion command, and redefining a name simply
//! overwrites its value.  Lifetime is the session/process.

use std::collections::HashMap;

/// String-valued variable store.
#[derive(Debug, Default)]
pub struct VarStore {
    vars: HashMap<String, String>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Get the string value of a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns `true` if the variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut vars = VarStore::new();
        vars.set("greeting", "hello");
        assert_eq!(vars.get("greeting"), Some("hello"));
    }

    #[test]
    fn redefinition_overwrites() {
        let mut vars = VarStore::new();
        vars.set("x", "old");
        vars.set("x", "new");
        assert_eq!(vars.get("x"), Some("new"));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut vars = VarStore::new();
        vars.set("Name", "upper");
        assert_eq!(vars.get("Name"), Some("upper"));
        assert_eq!(vars.get("name"), None);
    }

    #[test]
    fn missing_returns_none() {
        let vars = VarStore::new();
        assert_eq!(vars.get("nope"), None);
        assert!(!vars.contains("nope"));
        assert!(vars.is_empty());
    }

    #[test]
    fn contains() {
        let mut vars = VarStore::new();
        vars.set("present", "yes");
        assert!(vars.contains("present"));
        assert!(!vars.contains("absent"));
    }
}
