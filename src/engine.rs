use crate::error::TreeError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::options::{OrderingPolicy, TraversalConfig};
use crate::tree::{RenderState, push_entry_line, push_root_line};
use crate::types::{DirectoryEntry, EntryKind, TreeResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
/// Renders directories as `tree`-style text through a [`FileSystem`].
#[derive(Debug, Default, Clone)]
pub struct TreeBuilder<F = OsFileSystem> {
    fs: F,
}
impl<F: FileSystem> TreeBuilder<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }
    /// Renders `root` and everything below it that `config` lets through.
    ///
    /// The first line is the root's base name, followed by one line per
    /// visible entry. Fails with [`TreeError::NotADirectory`] when `root` is
    /// not a directory, and with [`TreeError::Io`] when any listing or stat
    /// fails at any depth; no partial output is returned.
    pub fn render(&self, root: &Path, config: &TraversalConfig) -> Result<String, TreeError> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Rendering tree for {} (max_depth: {:?}, show_size: {})",
            root.display(),
            config.max_depth,
            config.show_size
        );
        let stat = self.fs.stat(root)?;
        if stat.kind != EntryKind::Directory {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }
        let mut out = String::with_capacity(1024);
        push_root_line(
            &mut out,
            &root_name(root),
            config.show_size.then_some(stat.size),
        );
        self.write_dir(&mut out, root, config, &RenderState::root())?;
        Ok(out)
    }
    fn visible_children(
        &self,
        dir: &Path,
        config: &TraversalConfig,
    ) -> Result<Vec<DirectoryEntry>, TreeError> {
        let mut entries = self.fs.list(dir)?;
        entries.retain(|entry| !config.is_excluded(&entry.name));
        if config.ordering == OrderingPolicy::Sorted {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        #[cfg(feature = "logging")]
        tracing::trace!("{}: {} visible entries", dir.display(), entries.len());
        Ok(entries)
    }
    fn write_entry(
        &self,
        out: &mut String,
        entry: &DirectoryEntry,
        is_last: bool,
        config: &TraversalConfig,
        state: &RenderState,
    ) -> Result<(), TreeError> {
        let size = if config.show_size {
            Some(self.fs.stat(&entry.path)?.size)
        } else {
            None
        };
        push_entry_line(out, state, is_last, &entry.name, size);
        if entry.is_dir() && config.allows_descent(state.depth) {
            self.write_dir(out, &entry.path, config, &state.descend(is_last))?;
        }
        Ok(())
    }
    #[cfg(not(feature = "parallel"))]
    fn write_dir(
        &self,
        out: &mut String,
        dir: &Path,
        config: &TraversalConfig,
        state: &RenderState,
    ) -> Result<(), TreeError> {
        let entries = self.visible_children(dir, config)?;
        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            self.write_entry(out, entry, i == last, config, state)?;
        }
        Ok(())
    }
    #[cfg(feature = "parallel")]
    fn write_dir(
        &self,
        out: &mut String,
        dir: &Path,
        config: &TraversalConfig,
        state: &RenderState,
    ) -> Result<(), TreeError> {
        let entries = self.visible_children(dir, config)?;
        let last = entries.len().saturating_sub(1);
        let blocks = entries
            .par_iter()
            .enumerate()
            .map(|(i, entry)| -> Result<String, TreeError> {
                let mut block = String::new();
                self.write_entry(&mut block, entry, i == last, config, state)?;
                Ok(block)
            })
            .collect::<Result<Vec<String>, TreeError>>()?;
        for block in blocks {
            out.push_str(&block);
        }
        Ok(())
    }
}
fn root_name(root: &Path) -> String {
    root.components()
        .next_back()
        .map(|last| last.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
/// Renders `root` from the host filesystem.
pub fn render(root: impl AsRef<Path>, config: &TraversalConfig) -> Result<String, TreeError> {
    TreeBuilder::new(OsFileSystem).render(root.as_ref(), config)
}
/// Renders `root` from the host filesystem and keeps the inputs alongside the text.
pub fn generate_tree(
    root: impl AsRef<Path>,
    config: TraversalConfig,
) -> Result<TreeResult, TreeError> {
    let root = root.as_ref();
    let tree = render(root, &config)?;
    Ok(TreeResult {
        root: root.to_path_buf(),
        config,
        tree,
    })
}
