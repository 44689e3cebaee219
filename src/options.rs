use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
/// How siblings are ordered within a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingPolicy {
    /// Whatever order the directory read returns. Platform dependent.
    #[default]
    PlatformDefault,
    /// Byte-wise ascending by entry name.
    Sorted,
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// `None` descends without limit. `Some(0)` and `Some(1)` both list only
    /// the root's direct children.
    pub max_depth: Option<usize>,
    pub excluded: BTreeSet<String>,
    pub show_size: bool,
    pub ordering: OrderingPolicy,
}
impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            excluded: BTreeSet::new(),
            show_size: false,
            ordering: OrderingPolicy::PlatformDefault,
        }
    }
}
impl TraversalConfig {
    /// Converts a signed depth where `-1` means unlimited.
    ///
    /// Any other negative value never permits descent, so it maps to `Some(0)`.
    pub fn depth_from_signed(depth: i64) -> Option<usize> {
        match depth {
            -1 => None,
            d if d < 0 => Some(0),
            d => Some(usize::try_from(d).unwrap_or(usize::MAX)),
        }
    }
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.excluded.contains(name)
    }
    /// Whether a directory listed at `depth` may have its own children listed.
    pub fn allows_descent(&self, depth: usize) -> bool {
        match self.max_depth {
            None => true,
            Some(max) => depth.saturating_add(1) < max,
        }
    }
}
#[derive(Debug, Default)]
pub struct TraversalConfigBuilder {
    config: TraversalConfig,
}
impl TraversalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.config.max_depth = None;
        self
    }
    /// Sets the depth from a signed value, `-1` meaning unlimited.
    pub fn signed_depth(mut self, depth: i64) -> Self {
        self.config.max_depth = TraversalConfig::depth_from_signed(depth);
        self
    }
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.excluded.insert(name.into());
        self
    }
    pub fn excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excluded = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn show_size(mut self, yes: bool) -> Self {
        self.config.show_size = yes;
        self
    }
    pub fn ordering(mut self, policy: OrderingPolicy) -> Self {
        self.config.ordering = policy;
        self
    }
    pub fn build(self) -> TraversalConfig {
        self.config
    }
}
