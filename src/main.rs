//! eldoc — generate documentation from annotated web-component source
//! files and Markdown changelogs.
//!
//! Two modes:
//!
//! - **stdin mode**: `eldoc < x-slider.js` parses a widget source file and
//!   writes the rendered documentation to stdout.
//! - **file mode**: `eldoc -o docs elements/*.js CHANGELOG.md` renders one
//!   documentation file per input into the output directory.
//!
//! `--latest` and `--deny-pending` read the newest release from a
//! changelog for release stamping and publish gating.

mod model;
mod parser;
mod release;
mod render;
mod scanner;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "eldoc",
    about = "Generate documentation from annotated web component sources and changelogs"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads a widget
    /// source file from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Print the newest release of the given changelog as "version date"
    #[arg(long)]
    latest: bool,

    /// Exit with an error when the newest release of the given changelog
    /// is still pending
    #[arg(long)]
    deny_pending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.latest || cli.deny_pending {
        return release_mode(&cli);
    }
    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }
    file_mode(&cli)
}

/// stdin mode: parse a widget source file from stdin, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let input = read_stdin()?;
    let doc = model::Document::Element(parser::element::parse(&input));
    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc));
    Ok(())
}

/// file mode: process multiple files, write one document per input.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let doc = match parser::parse_file(path, &content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        // Skip files that produced nothing (e.g. helper modules with no
        // @element block).
        if is_empty_doc(&doc) {
            continue;
        }

        let name = derive_output_name(&path.to_string_lossy());
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// release mode: read the newest release from a changelog for stamping
/// and publish gating.
fn release_mode(cli: &Cli) -> Result<()> {
    let input = match cli.files.as_slice() {
        [] => read_stdin()?,
        [path] => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        }
        _ => bail!("release checks take a single changelog file"),
    };

    let releases = parser::changelog::parse(&input)?;
    let newest = release::latest(&releases).context("changelog contains no releases")?;

    if !release::is_semverish(&newest.version) {
        eprintln!("warning: unusual version string: {}", newest.version);
    }
    if cli.deny_pending {
        release::check_publishable(&releases)?;
    }
    if cli.latest {
        println!("{} {}", newest.version, newest.date);
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn is_empty_doc(doc: &model::Document) -> bool {
    match doc {
        model::Document::Element(meta) => meta.element_name.is_empty(),
        model::Document::Changelog(releases) => releases.is_empty(),
    }
}

/// Expand each input argument into real file paths: literal files pass
/// through, directories are scanned (non-recursive) for parseable files,
/// anything else is treated as a glob pattern.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|p| p.is_file() && parser::is_supported(p)),
            );
        } else {
            let matches: Vec<_> = glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect();
            if matches.is_empty() {
                eprintln!("warning: no files matched: {}", pattern);
            }
            files.extend(matches);
        }
    }
    // Deterministic output order regardless of glob/readdir order.
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "elements/x-slider.js" → "x-slider", "CHANGELOG.md" → "CHANGELOG"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".js")
        .or_else(|| filename.strip_suffix(".mjs"))
        .or_else(|| filename.strip_suffix(".md"))
        .unwrap_or(filename)
        .to_string()
}
