//! Implementation of element expansion.
//!
//! Resolves the requested elements against the search path and prints the
//! resulting closure in the selected output format.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use elemental_lib::{ElementStore, SearchPath, expand_dependencies};

use crate::output::{OutputFormat, print_json, shell_quote};

pub struct ExpandArgs<'a> {
  pub elements: &'a [String],
  pub elements_path: Option<&'a OsStr>,
  pub format: OutputFormat,
}

#[derive(Serialize)]
struct ExpandOutput<'a> {
  elements: &'a BTreeSet<String>,
}

pub fn cmd_expand(args: ExpandArgs<'_>) -> Result<()> {
  let search_path = match args.elements_path {
    Some(raw) => SearchPath::parse(raw)?,
    None => SearchPath::from_env()?,
  };
  let store = ElementStore::new(search_path);
  debug!(search_path = %store.search_path(), requested = args.elements.len(), "expanding elements");

  let elements = expand_dependencies(args.elements, &store)?;

  match args.format {
    OutputFormat::Text => println!("{}", join_elements(&elements)),
    OutputFormat::Json => print_json(&ExpandOutput { elements: &elements })?,
    OutputFormat::Env => print_env(&store, &elements)?,
  }

  Ok(())
}

fn join_elements(elements: &BTreeSet<String>) -> String {
  elements.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Print `IMAGE_ELEMENT` and `IMAGE_ELEMENT_YAML` exports.
///
/// The YAML value is a JSON flow mapping of element name to directory.
fn print_env(store: &ElementStore, elements: &BTreeSet<String>) -> Result<()> {
  let mut paths = BTreeMap::new();
  for element in elements {
    let dir = store.locate(element)?;
    let dir = dunce::canonicalize(&dir)
      .with_context(|| format!("Failed to resolve element directory: {}", dir.display()))?;
    paths.insert(element.as_str(), dir.display().to_string());
  }

  let yaml = serde_json::to_string(&paths).context("Failed to serialize element paths")?;

  println!("export IMAGE_ELEMENT={}", shell_quote(&join_elements(elements)));
  println!("export IMAGE_ELEMENT_YAML={}", shell_quote(&yaml));
  Ok(())
}
