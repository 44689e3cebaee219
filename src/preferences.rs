//! Stored defaults and how they combine with per-invocation arguments.

use crate::error::TreeError;
use crate::options::{TraversalConfig, TraversalConfigBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const FALLBACK_DEPTH: i64 = 2;

/// Defaults read from a TOML file.
///
/// ```toml
/// default_depth = 3
/// default_excluded_dirs = ".git,node_modules,target"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Depth used when the invocation gives none. `-1` is unlimited, `0` falls back to 2.
    pub default_depth: i64,
    /// Comma-separated base names excluded on every invocation.
    pub default_excluded_dirs: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_depth: FALLBACK_DEPTH,
            default_excluded_dirs: ".git,node_modules".to_string(),
        }
    }
}

/// Values supplied for a single run, each overriding or extending [`Preferences`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    pub depth: Option<i64>,
    /// Comma-separated names, added to the preference list.
    pub exclude: Option<String>,
    /// Sizes are shown unless this is `"false"` (any case).
    pub show_size: Option<String>,
}

impl Preferences {
    /// Loads preferences from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, TreeError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|e| TreeError::io(path, e))?;
        toml::from_str(&raw).map_err(|e| TreeError::Preferences {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn effective_default_depth(&self) -> i64 {
        if self.default_depth == 0 {
            FALLBACK_DEPTH
        } else {
            self.default_depth
        }
    }

    pub fn merge(&self, args: &InvocationArgs) -> TraversalConfig {
        let depth = args.depth.unwrap_or_else(|| self.effective_default_depth());
        let mut excluded = parse_name_list(&self.default_excluded_dirs);
        if let Some(extra) = &args.exclude {
            excluded.extend(parse_name_list(extra));
        }
        let show_size = !args
            .show_size
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("false"));
        TraversalConfigBuilder::new()
            .signed_depth(depth)
            .excluded(excluded)
            .show_size(show_size)
            .build()
    }
}

/// Splits a comma-separated list, trimming whitespace and dropping empty items.
pub fn parse_name_list(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
