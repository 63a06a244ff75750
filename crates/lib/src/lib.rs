//! elemental-lib: element dependency resolution for disk image builds.
//!
//! This crate provides the pieces used to turn a user's element list into
//! the full set of elements to build:
//! - `SearchPath`: the ordered element directories (`$ELEMENTS_PATH`)
//! - `ElementStore`: reads `element-deps` / `element-provides` for one element
//! - `expand_dependencies`: the closure over deps, minus provided names

pub mod config;
pub mod consts;
pub mod expand;
pub mod store;
pub mod util;

pub use config::{ConfigError, SearchPath};
pub use expand::{Conflict, ExpandError, Expansion, expand, expand_dependencies};
pub use store::{ElementMetadata, ElementStore, MetadataSource, StoreError};
