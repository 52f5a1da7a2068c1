// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

impl NavEntry {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_owned(),
            target: target.to_owned(),
        }
    }
}

// Matches on the final path segment. When several entries share a segment the
// last one evaluated wins; that order is incidental, not contractual.
pub fn active_entry(current_path: &str, entries: &[NavEntry]) -> Option<usize> {
    let current = final_segment(current_path);
    let mut active = None;
    for (index, entry) in entries.iter().enumerate() {
        if final_segment(&entry.target) == current {
            active = Some(index);
        }
    }
    active
}

fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::{NavEntry, active_entry};

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("Overview", "ops/dashboard"),
            NavEntry::new("Invoices", "billing/invoices"),
        ]
    }

    #[test]
    fn final_segment_match_selects_one_entry() {
        let active = active_entry("billing/invoices", &entries());
        assert_eq!(active, Some(1));
    }

    #[test]
    fn matching_ignores_leading_path_components() {
        let active = active_entry("some/other/prefix/dashboard", &entries());
        assert_eq!(active, Some(0));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(active_entry("ops/reports", &entries()), None);
    }

    #[test]
    fn duplicate_segments_resolve_to_the_last_entry() {
        let duplicated = vec![
            NavEntry::new("First", "a/users"),
            NavEntry::new("Second", "b/users"),
        ];
        assert_eq!(active_entry("c/users", &duplicated), Some(1));
    }

    #[test]
    fn segmentless_paths_compare_whole() {
        let flat = vec![NavEntry::new("Users", "users")];
        assert_eq!(active_entry("users", &flat), Some(0));
        assert_eq!(active_entry("ops/users", &flat), Some(0));
    }
}
