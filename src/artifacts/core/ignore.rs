//! Ignore-pattern predicate
//!
//! Workspace scans must never descend into the repository's own metadata
//! directory, and should skip common OS/editor artifacts. The predicate is
//! injected into the workspace so a richer pattern source (an ignore file
//! parser, say) can be substituted without touching the engine.
//!
//! Matching is deliberately simple, not a glob engine:
//!
//! - `name/` matches any path containing `name` as a whole segment
//! - `*suffix` matches any path ending in `suffix`
//! - anything else matches as a plain substring

use crate::areas::repository::METADATA_DIR;

const DEFAULT_PATTERNS: [&str; 6] = [".jot/", ".git/", ".DS_Store", ".vscode/", ".idea/", "*.swp"];

#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<String>,
}

impl IgnoreList {
    pub fn new(patterns: Vec<String>) -> Self {
        IgnoreList { patterns }
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        // the metadata directory is always out of bounds
        if path
            .split('/')
            .any(|segment| segment == METADATA_DIR)
        {
            return true;
        }

        self.patterns.iter().any(|pattern| {
            if let Some(dir) = pattern.strip_suffix('/') {
                path.split('/').any(|segment| segment == dir)
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                path.ends_with(suffix)
            } else {
                path.contains(pattern.as_str())
            }
        })
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        IgnoreList::new(DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect())
    }
}
