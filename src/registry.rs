//! Name → integer id assignment with first-seen-order semantics
//!
//! Rooms and event types carry no numeric identifier in the frab source, so
//! the converter invents stable ids for them: one registry per namespace,
//! each advancing independently from the same configured base offset.

use std::collections::HashMap;

/// Assigns a unique integer id to each distinct name, in strict
/// first-encounter order.
///
/// The counter is pre-incremented before the first assignment, so every
/// assigned id is `base + rank` with rank starting at 1. "Not yet assigned"
/// is represented by absence from the map, never by a zero sentinel, so a
/// base offset that makes ids straddle zero stays unambiguous.
///
/// Not thread-safe; the pipeline is single-pass and sequential.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    ids: HashMap<String, i64>,
    next: i64,
}

impl IdRegistry {
    pub fn new(base: i64) -> Self {
        Self {
            ids: HashMap::new(),
            next: base,
        }
    }

    /// Return the id for `name`, assigning the next one if unseen.
    /// Repeated calls with the same name return the same id.
    pub fn assign(&mut self, name: &str) -> i64 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        self.next += 1;
        self.ids.insert(name.to_string(), self.next);
        self.next
    }

    /// Look up a previously assigned id. `None` means the name was never
    /// registered; there is no removal, so this is stable once `Some`.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over (name, id) pairs. Iteration order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ids.iter().map(|(name, &id)| (name.as_str(), id))
    }
}
