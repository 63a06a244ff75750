//! Dependency expansion.
//!
//! Computes the set of elements needed to build an image from the set a user
//! asked for. Traversal is a breadth-first worklist over `element-deps`,
//! with `element-provides` marking names as virtually satisfied:
//!
//! - A queued element that is already provided is skipped. Its own deps file
//!   is never read, so a placeholder element cannot drag in its tree.
//! - Provided names are removed from the final set.
//! - Provides discovered late are not applied to elements that were already
//!   expanded.
//!
//! After traversal, something must provide `operating-system`, and no
//! requested element may also be provided by another element.

mod state;

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::consts::OPERATING_SYSTEM;
use crate::store::{MetadataSource, StoreError};

pub use state::ProvidedBy;
use state::ClosureState;

/// A requested element that another element also provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
  pub element: String,
  pub provided_by: Vec<String>,
}

impl fmt::Display for Conflict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} : already provided by {}", self.element, self.provided_by.join(", "))
  }
}

#[derive(Debug, Error)]
pub enum ExpandError {
  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("Please include an operating system element.")]
  MissingOperatingSystem,

  #[error(
    "The following elements are already provided by another element:{}",
    format_conflicts(.conflicts)
  )]
  ConflictingElements { conflicts: Vec<Conflict> },
}

fn format_conflicts(conflicts: &[Conflict]) -> String {
  conflicts.iter().map(|c| format!("\n  {}", c)).collect()
}

/// Result of a successful expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
  /// Elements to build.
  pub elements: BTreeSet<String>,

  /// Names satisfied virtually by some element in the closure.
  pub provided: BTreeSet<String>,

  /// Who provides each name in `provided`.
  pub provided_by: ProvidedBy,
}

/// Expand `user_elements` into the full set of elements to build.
pub fn expand_dependencies<S>(user_elements: &[String], source: &S) -> Result<BTreeSet<String>, ExpandError>
where
  S: MetadataSource + ?Sized,
{
  expand(user_elements, source).map(|expansion| expansion.elements)
}

/// Like [`expand_dependencies`], also returning the provided names and
/// their providers.
pub fn expand<S>(user_elements: &[String], source: &S) -> Result<Expansion, ExpandError>
where
  S: MetadataSource + ?Sized,
{
  let mut state = ClosureState::new(user_elements);

  while let Some(element) = state.pop() {
    if state.is_provided(&element) {
      trace!(element = %element, "skipping provided element");
      continue;
    }

    let metadata = source.metadata(&element)?;
    debug!(
      element = %element,
      deps = metadata.dependencies.len(),
      provides = metadata.provides.len(),
      "expanding element"
    );

    let queued = state.record(&element, metadata);
    trace!(element = %element, queued, pending = state.queue.len(), "queued dependencies");
  }

  validate(user_elements, &state)?;

  let elements = state.closure();
  debug!(count = elements.len(), "expansion complete");

  Ok(Expansion {
    elements,
    provided: state.provided,
    provided_by: state.provided_by,
  })
}

fn validate(user_elements: &[String], state: &ClosureState) -> Result<(), ExpandError> {
  if !state.is_provided(OPERATING_SYSTEM) {
    return Err(ExpandError::MissingOperatingSystem);
  }

  let conflicts: Vec<Conflict> = user_elements
    .iter()
    .filter(|e| state.is_provided(e))
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(|e| Conflict {
      element: e.clone(),
      provided_by: state.provided_by.providers(e).to_vec(),
    })
    .collect();

  if !conflicts.is_empty() {
    return Err(ExpandError::ConflictingElements { conflicts });
  }

  Ok(())
}
