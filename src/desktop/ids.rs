use parking_lot::Mutex;
use std::fmt;
use ulid::{Generator, Ulid};

/// Produces opaque entity identifiers such as `window-01J9Z3...`.
///
/// Backed by a monotonic ULID generator, so ids minted in the same
/// millisecond still sort in creation order and never repeat within the
/// process.
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    /// Next id with the given prefix (`window`, `folder`, ...).
    pub fn next(&self, prefix: &str) -> String {
        let ulid = match self.inner.lock().generate() {
            Ok(ulid) => ulid,
            // Random bits exhausted within one millisecond; a fresh random ULID
            // is still unique for all practical purposes.
            Err(_) => Ulid::new(),
        };
        format!("{prefix}-{ulid}")
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_prefixed_and_unique() {
        let ids = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = ids.next("window");
            assert!(id.starts_with("window-"));
            assert!(seen.insert(id), "duplicate id");
        }
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let ids = IdGenerator::new();
        let a = ids.next("window");
        let b = ids.next("window");
        assert!(a < b);
    }

    #[test]
    fn test_debug_does_not_expose_generator_state() {
        let ids = IdGenerator::new();
        assert_eq!(format!("{ids:?}"), "IdGenerator { .. }");
    }
}
