//! Content globs: the files the build tool scans for class names.
//!
//! Patterns are written relative to the project root, usually with a leading
//! `./` (`./templates/**/*.html`). A pattern prefixed with `!` excludes
//! matching files from the scan set.

use crate::error::InvalidConfigReason;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ordered list of content glob patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContentGlobs(Vec<String>);

impl ContentGlobs {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(patterns.into_iter().map(Into::into).collect())
    }

    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that the list is non-empty and every pattern compiles.
    ///
    /// Returns the patterns that appear more than once.
    pub fn validate(&self) -> Result<Vec<String>, InvalidConfigReason> {
        if self.0.is_empty() {
            return Err(InvalidConfigReason::EmptyContent);
        }
        if !self.0.iter().any(|p| !p.starts_with('!')) {
            // Only exclusions: nothing would ever be scanned
            return Err(InvalidConfigReason::EmptyContent);
        }

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for pattern in &self.0 {
            compile(pattern)?;
            if !seen.insert(pattern.as_str()) && !duplicates.contains(pattern) {
                duplicates.push(pattern.clone());
            }
        }
        Ok(duplicates)
    }

    /// Compile the patterns into a matcher.
    pub fn matcher(&self) -> Result<ContentMatcher, InvalidConfigReason> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();
        let mut include_patterns = Vec::new();

        for pattern in &self.0 {
            let glob = compile(pattern)?;
            if pattern.starts_with('!') {
                exclude.add(glob);
            } else {
                include.add(glob);
                include_patterns.push(pattern.clone());
            }
        }

        Ok(ContentMatcher {
            include: build_set(include)?,
            exclude: build_set(exclude)?,
            include_patterns,
        })
    }
}

impl<S: Into<String>> FromIterator<S> for ContentGlobs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn normalize(pattern: &str) -> &str {
    let mut pattern = pattern.strip_prefix('!').unwrap_or(pattern);
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

fn compile(pattern: &str) -> Result<Glob, InvalidConfigReason> {
    let normalized = normalize(pattern);
    if normalized.trim().is_empty() {
        return Err(InvalidConfigReason::InvalidGlob {
            pattern: pattern.to_string(),
            message: "pattern is empty".to_string(),
        });
    }

    GlobBuilder::new(normalized)
        .literal_separator(true)
        .build()
        .map_err(|e| InvalidConfigReason::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

fn build_set(builder: GlobSetBuilder) -> Result<GlobSet, InvalidConfigReason> {
    builder.build().map_err(|e| InvalidConfigReason::InvalidGlob {
        pattern: e.glob().unwrap_or_default().to_string(),
        message: e.kind().to_string(),
    })
}

/// Compiled content patterns.
///
/// Answers whether a project-relative path is part of the scan set. File
/// contents are never read here.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    include: GlobSet,
    exclude: GlobSet,
    include_patterns: Vec<String>,
}

impl ContentMatcher {
    /// True when some pattern includes `path` and no `!` pattern excludes it.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = relative(path.as_ref());
        self.include.is_match(path) && !self.exclude.is_match(path)
    }

    /// The include patterns that match `path`, in configuration order.
    ///
    /// Empty when the path is excluded.
    pub fn matching_patterns(&self, path: impl AsRef<Path>) -> Vec<&str> {
        let path = relative(path.as_ref());
        if self.exclude.is_match(path) {
            return Vec::new();
        }
        let mut hits = self.include.matches(path);
        hits.sort_unstable();
        hits.into_iter()
            .map(|i| self.include_patterns[i].as_str())
            .collect()
    }
}

fn relative(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
