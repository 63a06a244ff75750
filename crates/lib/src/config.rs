//! Search path configuration.
//!
//! The element search path is an ordered list of directories. It is normally
//! read from `ELEMENTS_PATH` once at startup and then passed explicitly to
//! [`ElementStore`](crate::store::ElementStore), so nothing below the entry
//! point touches the process environment.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{ELEMENTS_PATH_VAR, SEARCH_PATH_SEPARATOR};

#[derive(Debug, Error)]
pub enum ConfigError {
  /// The search path environment variable is unset or empty.
  #[error("${var} must be set")]
  MissingSearchPath { var: &'static str },

  /// An explicitly supplied search path is empty.
  #[error("element search path is empty")]
  EmptySearchPath,
}

/// Ordered list of directories searched for elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
  dirs: Vec<PathBuf>,
}

impl SearchPath {
  /// Parse a colon-separated search path.
  ///
  /// Empty segments are kept as-is and resolve relative to the working
  /// directory. Entries need not be valid UTF-8.
  pub fn parse(raw: impl AsRef<OsStr>) -> Result<Self, ConfigError> {
    let raw = raw.as_ref();
    if raw.is_empty() {
      return Err(ConfigError::EmptySearchPath);
    }

    Ok(Self {
      dirs: split_search_path(raw),
    })
  }

  /// Read the search path from `$ELEMENTS_PATH`.
  pub fn from_env() -> Result<Self, ConfigError> {
    match std::env::var_os(ELEMENTS_PATH_VAR) {
      Some(raw) if !raw.is_empty() => Self::parse(raw),
      _ => Err(ConfigError::MissingSearchPath { var: ELEMENTS_PATH_VAR }),
    }
  }

  pub fn from_dirs<I, P>(dirs: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    Self {
      dirs: dirs.into_iter().map(Into::into).collect(),
    }
  }

  pub fn dirs(&self) -> impl Iterator<Item = &Path> {
    self.dirs.iter().map(PathBuf::as_path)
  }
}

#[cfg(unix)]
fn split_search_path(raw: &OsStr) -> Vec<PathBuf> {
  use std::os::unix::ffi::OsStrExt;

  raw
    .as_bytes()
    .split(|&b| b == SEARCH_PATH_SEPARATOR as u8)
    .map(|segment| PathBuf::from(OsStr::from_bytes(segment)))
    .collect()
}

#[cfg(not(unix))]
fn split_search_path(raw: &OsStr) -> Vec<PathBuf> {
  raw
    .to_string_lossy()
    .split(SEARCH_PATH_SEPARATOR)
    .map(PathBuf::from)
    .collect()
}

impl fmt::Display for SearchPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, dir) in self.dirs.iter().enumerate() {
      if i > 0 {
        write!(f, "{}", SEARCH_PATH_SEPARATOR)?;
      }
      write!(f, "{}", dir.display())?;
    }
    Ok(())
  }
}
