//! viewgrep CLI
//!
//! Query a serialized view hierarchy with CSS-like selectors, either from
//! command-line arguments or through an interactive prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use viewgrep_selector::{Sequence, collect_matches, parse};
use viewgrep_view::ViewNode;

/// Default document: the Quetoo system-settings view hierarchy.
const DEFAULT_URL: &str = "https://raw.githubusercontent.com/jdolan/quetoo/master/src/cgame/default/ui/settings/SystemViewController.json";

/// Match CSS-like selector sequences against a serialized view hierarchy.
///
/// Each selector argument is one descendant chain (`Panel .fancy #ok`);
/// with no arguments, an interactive prompt reads one chain per line.
#[derive(Parser)]
#[command(name = "viewgrep")]
struct Args {
    /// Selector sequences to run, one output block each; omit to start the
    /// interactive prompt.
    selectors: Vec<String>,

    /// Load the view hierarchy from a local JSON file instead of fetching.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// URL of the view-hierarchy document to fetch.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Print the decoded hierarchy before matching.
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let document = load_document(&args)?;
    let root: ViewNode =
        serde_json::from_str(&document).context("view-hierarchy document is not valid JSON")?;

    if args.tree {
        root.dump(0);
    }

    if args.selectors.is_empty() {
        run_prompt(&root)
    } else {
        for raw in &args.selectors {
            run_sequence(&root, raw);
        }
        Ok(())
    }
}

/// Load the document text from the configured source.
fn load_document(args: &Args) -> Result<String> {
    match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => viewgrep_common::net::fetch_text(&args.url)
            .context("failed to fetch view-hierarchy document"),
    }
}

/// Interactive loop: one selector sequence per line until `quit`/`q` or EOF.
fn run_prompt(root: &ViewNode) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("selector> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        let entry = line.trim();

        if entry.is_empty() {
            continue;
        }
        if entry == "quit" || entry == "q" {
            break;
        }

        run_sequence(root, entry);
    }

    Ok(())
}

/// Parse one raw sequence, match it against the tree, and print its block.
fn run_sequence(root: &ViewNode, raw: &str) {
    let sequence = parse(raw);
    warn_wildcard_tokens(raw, &sequence);

    println!("{}", raw.bold());
    let matches = collect_matches(root, &sequence);
    for node in &matches {
        println!("  {}", node.descriptor().green());
    }

    let count = matches.len();
    let plural = if count == 1 { "match" } else { "matches" };
    println!("  {}", format!("{count} {plural}").dimmed());
}

/// Flag tokens that parsed to a match-anything selector; usually a typo
/// such as a lowercase type name.
fn warn_wildcard_tokens(raw: &str, sequence: &Sequence) {
    for (token, selector) in raw.split_whitespace().zip(&sequence.selectors) {
        if selector.is_wildcard() {
            viewgrep_common::warning::warn_once(
                "selector",
                &format!("token '{token}' has no recognized attributes; it matches any view"),
            );
        }
    }
}
