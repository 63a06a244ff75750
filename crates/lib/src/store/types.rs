//! Types shared by metadata store implementations.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raw, non-transitive metadata declared by a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementMetadata {
  /// Elements this element requires.
  pub dependencies: BTreeSet<String>,

  /// Names this element satisfies on behalf of others. These may be virtual
  /// names with no element directory of their own.
  pub provides: BTreeSet<String>,
}

/// Errors that can occur while looking up element metadata.
#[derive(Debug, Error)]
pub enum StoreError {
  /// The element directory is absent from every search path entry.
  #[error("Element '{element}' not found in '{search_path}'")]
  ElementNotFound { element: String, search_path: String },

  /// A metadata file exists but could not be read.
  #[error("failed to read '{path}': {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
