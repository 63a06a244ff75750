use std::ffi::OsString;
use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::{ExpandArgs, cmd_expand};
use output::{OutputFormat, print_error, print_warning};

/// element-info - resolve disk image element dependencies
#[derive(Parser)]
#[command(name = "element-info")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Elements to expand
  #[arg(required = true)]
  elements: Vec<String>,

  /// (DEPRECATED) print expanded dependencies of all args
  #[arg(short = 'd', long)]
  expand_dependencies: bool,

  /// Colon-separated element search path (overrides $ELEMENTS_PATH)
  #[arg(long, value_name = "PATH")]
  elements_path: Option<OsString>,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .without_time()
    .init();

  if cli.expand_dependencies {
    print_warning("expand-dependencies flag is deprecated, and is now on by default.");
  }

  let result = cmd_expand(ExpandArgs {
    elements: &cli.elements,
    elements_path: cli.elements_path.as_deref(),
    format: cli.format,
  });

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&e.to_string());
      ExitCode::FAILURE
    }
  }
}
