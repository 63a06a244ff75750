//! Working state of a single expansion run.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::store::ElementMetadata;

/// Records which elements declared that they provide a given name, in
/// discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProvidedBy {
  index: BTreeMap<String, Vec<String>>,
}

impl ProvidedBy {
  pub fn record(&mut self, name: &str, provider: &str) {
    self.index.entry(name.to_string()).or_default().push(provider.to_string());
  }

  /// Providers of `name`, empty if nothing provides it.
  pub fn providers(&self, name: &str) -> &[String] {
    self.index.get(name).map(Vec::as_slice).unwrap_or_default()
  }
}

/// Worklist state for the closure traversal.
#[derive(Debug)]
pub(super) struct ClosureState {
  pub final_elements: BTreeSet<String>,
  pub queue: VecDeque<String>,
  pub provided: BTreeSet<String>,
  pub provided_by: ProvidedBy,
}

impl ClosureState {
  pub fn new(user_elements: &[String]) -> Self {
    Self {
      final_elements: user_elements.iter().cloned().collect(),
      queue: user_elements.iter().cloned().collect(),
      provided: BTreeSet::new(),
      provided_by: ProvidedBy::default(),
    }
  }

  /// Pop the next queued element, or `None` once the queue is drained.
  pub fn pop(&mut self) -> Option<String> {
    self.queue.pop_front()
  }

  pub fn is_provided(&self, element: &str) -> bool {
    self.provided.contains(element)
  }

  /// Fold one element's metadata into the state.
  ///
  /// Returns the number of newly queued elements.
  pub fn record(&mut self, element: &str, metadata: ElementMetadata) -> usize {
    for name in &metadata.provides {
      self.provided_by.record(name, element);
    }
    self.provided.extend(metadata.provides);

    let before = self.queue.len();
    for dep in &metadata.dependencies {
      if !self.final_elements.contains(dep) && !self.provided.contains(dep) {
        self.queue.push_back(dep.clone());
      }
    }
    let queued = self.queue.len() - before;

    self.final_elements.extend(metadata.dependencies);
    queued
  }

  /// Elements to build: everything collected that is not provided virtually.
  pub fn closure(&self) -> BTreeSet<String> {
    self.final_elements.difference(&self.provided).cloned().collect()
  }
}
