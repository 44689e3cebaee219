//! # bettertree
//!
//! `bettertree` renders a directory as an indented text tree in the style of the Unix `tree`
//! command, with a depth limit, excluded names, and optional per-entry sizes.
//!
//! Hidden entries (names starting with `.`) are always skipped. Excluded names are matched
//! exactly against base names at every depth, and excluded directories are pruned with
//! everything below them. Sizes are the filesystem's own size for each entry, so a directory
//! shows its inode size rather than the total of its contents.
//!
//! Entries keep the order the directory read returns them in unless
//! [`OrderingPolicy::Sorted`] is selected.
//!
//! # Features
//!
//! - `parallel`: Renders sibling entries in parallel using Rayon. Output order is unchanged.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use bettertree::{TraversalConfigBuilder, render};
//!
//! let config = TraversalConfigBuilder::new()
//!     .max_depth(2)
//!     .exclude("node_modules")
//!     .show_size(true)
//!     .build();
//!
//! let tree = render("/path/to/project", &config).expect("Failed to render directory");
//! print!("{}", tree);
//! ```

mod engine;
mod error;
pub mod fs;
mod options;
pub mod output;
pub mod preferences;
mod size;
mod tree;
mod types;

pub use engine::{TreeBuilder, generate_tree, render};
pub use error::TreeError;
pub use fs::{FileSystem, OsFileSystem};
pub use options::{OrderingPolicy, TraversalConfig, TraversalConfigBuilder};
pub use size::format_size;
pub use types::{DirectoryEntry, EntryKind, EntryStat, TreeResult};
