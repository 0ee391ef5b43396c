use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use theme_url_rewriter::{LoaderOptions, ThemeLoader, TracingLogger};

/// Rewrite relative asset urls in theme stylesheets.
#[derive(Debug, Parser)]
#[command(name = "theme-urls", version)]
struct Cli {
  /// Stylesheets to process.
  #[arg(required = true, value_name = "STYLESHEET")]
  stylesheets: Vec<PathBuf>,

  /// Log references that are left untouched because no asset was found.
  #[arg(long = "dev-mode")]
  dev_mode: bool,

  /// Rewrite the stylesheets in place instead of printing them.
  #[arg(short = 'w', long = "write")]
  write: bool,

  /// Loader configuration file. Defaults to theme-loader.config.json in the project root.
  #[arg(short = 'c', long = "config")]
  config: Option<PathBuf>,

  /// Project root containing the installed dependency packages.
  #[arg(long = "project-root", value_name = "DIR")]
  project_root: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.dev_mode { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  run(&cli)?;
  Ok(())
}

/// Merge the configuration file with command line flags.
///
/// `--config` must point at a readable file; otherwise `theme-loader.config.json` is
/// discovered in the project root. A project root set in the file wins over the flag.
fn resolve_options(cli: &Cli) -> Result<LoaderOptions> {
  let project_root = match &cli.project_root {
    Some(root) => root.clone(),
    None => std::env::current_dir().context("failed to determine the current directory")?,
  };

  let mut options = match &cli.config {
    Some(path) => LoaderOptions::load(path)?,
    None => LoaderOptions::discover(&project_root),
  };
  options.dev_mode |= cli.dev_mode;
  if options.project_root.is_none() {
    options.project_root = Some(project_root);
  }

  Ok(options)
}

/// Process every stylesheet, returning how many files were rewritten in place.
fn run(cli: &Cli) -> Result<usize> {
  let loader = ThemeLoader::new(resolve_options(cli)?, TracingLogger);

  let mut changed = 0usize;
  if cli.write {
    for stylesheet in &cli.stylesheets {
      if loader.rewrite_file_in_place(stylesheet)? {
        tracing::info!("rewrote {}", stylesheet.display());
        changed += 1;
      }
    }
    tracing::info!(
      "{changed} of {} stylesheet(s) updated",
      cli.stylesheets.len()
    );
  } else {
    for stylesheet in &cli.stylesheets {
      print!("{}", loader.process_file(stylesheet)?);
    }
  }

  Ok(changed)
}
