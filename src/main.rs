//! alcl-apidoc — generate API documentation from a serialized ALCL syntax tree.
//!
//! - **console**: `alcl-apidoc ast.json` prints every module and its functions
//! - **file**: `alcl-apidoc -f html -o docs/ build/*.json` writes `docs/index.html`

use alcl_apidoc::{extract, loader, render};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "alcl-apidoc",
    about = "Generate API documentation from serialized ALCL syntax trees"
)]
struct Cli {
    /// AST files (glob patterns supported)
    #[arg(default_value = "ast.json")]
    files: Vec<String>,

    /// Output format: text (default), html, markdown, json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Output file, or directory to write index.<ext> into. Defaults to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Project name shown in page titles
    #[arg(short = 'n', long, env = "PROJECT_NAME", default_value = "ALCL")]
    name: String,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve the renderer first so a bad --format fails before any I/O.
    let renderer = render::create_renderer(&cli.format)?;
    let inputs = expand_globs(&cli.files)?;

    let started = Instant::now();
    let ast = loader::load_all(&inputs).context("failed to load AST")?;
    let modules = extract(&ast);
    tracing::info!(
        modules = modules.len(),
        "AST loaded in {}ms",
        started.elapsed().as_millis()
    );

    let output = renderer.render(&cli.name, &modules);

    match cli.output {
        Some(ref path) => {
            let out_path = resolve_output(path, renderer.file_extension());
            write_output(&out_path, &output)?;
            tracing::info!(path = %out_path.display(), "documentation written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write stdout")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Expand glob patterns into a list of real file paths, in argument order.
///
/// Plain paths are passed through even when missing so the loader can
/// report them as not found.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() || !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        // Sort within a pattern for deterministic module order
        matches.sort();
        files.extend(matches);
    }
    files.dedup();
    if files.is_empty() {
        bail!("no AST files to process");
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// A directory output receives `index.<ext>`; anything else is a file path.
///
/// A trailing separator marks a directory even before it exists.
fn resolve_output(path: &Path, ext: &str) -> PathBuf {
    let names_dir = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);
    if names_dir || path.is_dir() {
        path.join(format!("index.{}", ext))
    } else {
        path.to_path_buf()
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
