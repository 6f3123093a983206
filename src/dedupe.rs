// src/dedupe.rs
use std::collections::HashSet;

/// First-occurrence dedup keyed on common name. Input order is preserved
/// by construction since the pipeline is a single linear scan.
#[derive(Debug, Default)]
pub struct Dedupe {
    seen: HashSet<String>,
}

impl Dedupe {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Returns true if this common name has not been seen before (and records it)
    pub fn should_emit(&mut self, common_name: &str) -> bool {
        self.seen.insert(common_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_emitted() {
        let mut dedupe = Dedupe::new();

        assert!(dedupe.should_emit("www.example.com"));
        assert!(!dedupe.should_emit("www.example.com"));
        assert!(dedupe.should_emit("api.example.com"));
        assert!(!dedupe.should_emit("api.example.com"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        // crt.sh lowercases names, so no normalization is done here
        let mut dedupe = Dedupe::new();

        assert!(dedupe.should_emit("www.example.com"));
        assert!(dedupe.should_emit("WWW.example.com"));
    }
}
