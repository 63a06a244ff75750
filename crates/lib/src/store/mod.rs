//! Element metadata lookup.
//!
//! Elements live in directories on an ordered search path:
//!
//! ```text
//! $ELEMENTS_PATH=/usr/share/elements:/home/me/elements
//!
//! /usr/share/elements/
//!   ubuntu/
//!     element-deps        # one element name per line
//!     element-provides    # e.g. "operating-system"
//!   vm/
//!     element-deps
//! ```
//!
//! The first search path entry containing an element's directory owns that
//! element; later entries are never consulted for it.

mod element_store;
mod types;

use std::collections::BTreeSet;

pub use element_store::{ElementStore, parse_lines};
pub use types::{ElementMetadata, StoreError};

/// Source of per-element metadata.
///
/// [`ElementStore`] reads from the filesystem; the expander only depends on
/// this trait.
pub trait MetadataSource {
  /// Non-transitive set of elements `element` depends on.
  fn dependencies(&self, element: &str) -> Result<BTreeSet<String>, StoreError>;

  /// Non-transitive set of names `element` provides.
  fn provides(&self, element: &str) -> Result<BTreeSet<String>, StoreError>;

  /// Both sets for `element`, dependencies first.
  fn metadata(&self, element: &str) -> Result<ElementMetadata, StoreError> {
    Ok(ElementMetadata {
      dependencies: self.dependencies(element)?,
      provides: self.provides(element)?,
    })
  }
}
