//! Internal module for the branch glyphs and line layout of a rendered tree.

use crate::size::format_size;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Position of a directory's children in the rendered output.
///
/// Each recursion level derives a fresh state from its parent's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RenderState {
    /// 0 for the root's direct children.
    pub depth: usize,
    /// Indentation accumulated from the ancestors' last-child decisions.
    pub prefix: String,
}

impl RenderState {
    pub fn root() -> Self {
        Self::default()
    }

    /// State for the children of an entry drawn at this level.
    pub fn descend(&self, is_last: bool) -> Self {
        let continuation = if is_last { BLANK } else { PIPE };
        Self {
            depth: self.depth + 1,
            prefix: format!("{}{}", self.prefix, continuation),
        }
    }
}

/// ` (1.5 KB)` when a size is present, empty otherwise.
pub(crate) fn size_suffix(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!(" ({})", format_size(bytes)),
        None => String::new(),
    }
}

/// Appends one entry line, newline included.
pub(crate) fn push_entry_line(
    out: &mut String,
    state: &RenderState,
    is_last: bool,
    name: &str,
    size: Option<u64>,
) {
    out.push_str(&state.prefix);
    out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    out.push_str(name);
    out.push_str(&size_suffix(size));
    out.push('\n');
}

/// Appends the unprefixed root line.
pub(crate) fn push_root_line(out: &mut String, name: &str, size: Option<u64>) {
    out.push_str(name);
    out.push_str(&size_suffix(size));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_accumulate_from_ancestors() {
        let root = RenderState::root();
        let middle = root.descend(false);
        let last = middle.descend(true);
        assert_eq!(middle.prefix, "│   ");
        assert_eq!(last.prefix, "│       ");
        assert_eq!(last.depth, 2);
        assert_eq!(root.prefix, "");
    }

    #[test]
    fn entry_lines() {
        let state = RenderState::root().descend(false);
        let mut out = String::new();
        push_entry_line(&mut out, &state, false, "a.txt", None);
        push_entry_line(&mut out, &state, true, "b", Some(1536));
        assert_eq!(out, "│   ├── a.txt\n│   └── b (1.5 KB)\n");
    }
}
