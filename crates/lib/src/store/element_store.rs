//! Filesystem-backed element metadata store.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::MetadataSource;
use super::types::StoreError;
use crate::config::SearchPath;
use crate::consts::{DEPS_FILENAME, PROVIDES_FILENAME};

/// Outcome of probing a single search path entry for an element file.
#[derive(Debug, PartialEq, Eq)]
enum Probe {
  /// The file exists; carries its contents.
  File(String),
  /// The element directory exists but does not contain the file.
  EmptyDir,
  /// Neither the file nor the element directory exists in this entry.
  Absent,
}

/// Reads `element-deps` and `element-provides` files from a search path.
#[derive(Debug, Clone)]
pub struct ElementStore {
  search_path: SearchPath,
}

impl ElementStore {
  pub fn new(search_path: SearchPath) -> Self {
    Self { search_path }
  }

  pub fn search_path(&self) -> &SearchPath {
    &self.search_path
  }

  /// Look up `filename` for `element` along the search path.
  ///
  /// The first entry holding the element directory decides the result: the
  /// parsed file if present, otherwise the empty set.
  pub fn lookup(&self, element: &str, filename: &str) -> Result<BTreeSet<String>, StoreError> {
    for dir in self.search_path.dirs() {
      match probe(dir, element, filename)? {
        Probe::File(contents) => {
          debug!(element, filename, dir = %dir.display(), "found element file");
          return Ok(parse_lines(&contents));
        }
        Probe::EmptyDir => {
          debug!(element, filename, dir = %dir.display(), "element declares no file");
          return Ok(BTreeSet::new());
        }
        Probe::Absent => continue,
      }
    }

    Err(self.not_found(element))
  }

  /// Directory holding `element`, using the same first-match rule as
  /// [`lookup`](Self::lookup).
  pub fn locate(&self, element: &str) -> Result<PathBuf, StoreError> {
    self
      .search_path
      .dirs()
      .map(|dir| dir.join(element))
      .find(|candidate| candidate.exists())
      .ok_or_else(|| self.not_found(element))
  }

  fn not_found(&self, element: &str) -> StoreError {
    StoreError::ElementNotFound {
      element: element.to_string(),
      search_path: self.search_path.to_string(),
    }
  }
}

impl MetadataSource for ElementStore {
  fn dependencies(&self, element: &str) -> Result<BTreeSet<String>, StoreError> {
    self.lookup(element, DEPS_FILENAME)
  }

  fn provides(&self, element: &str) -> Result<BTreeSet<String>, StoreError> {
    self.lookup(element, PROVIDES_FILENAME)
  }
}

fn probe(dir: &Path, element: &str, filename: &str) -> Result<Probe, StoreError> {
  let element_dir = dir.join(element);
  let path = element_dir.join(filename);

  match fs::read_to_string(&path) {
    Ok(contents) => {
      trace!(path = %path.display(), bytes = contents.len(), "read element file");
      Ok(Probe::File(contents))
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      if element_dir.exists() {
        Ok(Probe::EmptyDir)
      } else {
        Ok(Probe::Absent)
      }
    }
    Err(source) => Err(StoreError::Read { path, source }),
  }
}

/// Split file contents into a set of whitespace-trimmed lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Blank lines in the middle
/// of a file produce an empty-string member.
pub fn parse_lines(contents: &str) -> BTreeSet<String> {
  contents
    .replace("\r\n", "\n")
    .replace('\r', "\n")
    .lines()
    .map(|line| line.trim().to_string())
    .collect()
}
