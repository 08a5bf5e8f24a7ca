//! Match command - run labeled patterns from a file over a document.
//!
//! The pattern file is a JSON array of records. Each record names a
//! label, a pattern (a phrase for fuzzy patterns, a regex or predefined
//! key for regex patterns), and optional per-pattern settings:
//!
//! ```json
//! [
//!   {"label": "NAME", "pattern": "Grigori Fuzzphrase", "type": "fuzzy",
//!    "kwargs": {"fuzzy_func": "token_sort", "min_r": 80}},
//!   {"label": "GPE", "pattern": "Nizhny Novgorod"},
//!   {"label": "ZIP", "pattern": "zip_codes", "type": "regex",
//!    "kwargs": {"predef": true}}
//! ]
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::core::config::{RegexConfig, SearchConfig};
use crate::core::token::Doc;
use crate::core::types::PatternMatch;
use crate::matching::FuzzyMatcher;
use crate::regexmatch::RegexMatcher;
use crate::tokenize::whitespace_tokenize;

/// Arguments for the match command
#[derive(Args)]
pub struct MatchArgs {
    /// JSON pattern file
    #[arg(required = true)]
    pub patterns: PathBuf,

    /// Document to search ("-" reads stdin)
    #[arg(required = true)]
    pub document: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PatternKind {
    #[default]
    Fuzzy,
    Regex,
}

#[derive(Deserialize)]
struct PatternRecord {
    label: String,
    pattern: String,
    #[serde(rename = "type", default)]
    kind: PatternKind,
    #[serde(default)]
    kwargs: serde_json::Value,
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if the pattern file or document cannot be read, or
/// if any pattern fails to register.
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records: Vec<PatternRecord> = serde_json::from_str(
        &fs::read_to_string(&args.patterns)
            .with_context(|| format!("reading pattern file {}", args.patterns.display()))?,
    )
    .with_context(|| format!("parsing pattern file {}", args.patterns.display()))?;

    let mut fuzzy = FuzzyMatcher::new();
    let mut regex = RegexMatcher::new()?;
    for record in records {
        match record.kind {
            PatternKind::Fuzzy => {
                let config: SearchConfig = parse_kwargs(record.kwargs)
                    .with_context(|| format!("settings for pattern {:?}", record.pattern))?;
                fuzzy.add(
                    &record.label,
                    vec![whitespace_tokenize(&record.pattern)],
                    Some(vec![config]),
                )?;
            }
            PatternKind::Regex => {
                let config: RegexConfig = parse_kwargs(record.kwargs)
                    .with_context(|| format!("settings for pattern {:?}", record.pattern))?;
                regex.add(&record.label, vec![record.pattern], Some(vec![config]))?;
            }
        }
    }

    if verbose {
        eprintln!(
            "Registered {} fuzzy and {} regex labels",
            fuzzy.len(),
            regex.len(),
        );
    }

    let doc = read_document(&args.document)?;
    if verbose {
        eprintln!("Document: {} tokens", doc.len());
    }

    let mut matches = fuzzy.find_matches(&doc);
    matches.extend(regex.find_matches(&doc));
    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.label.cmp(&b.label))
    });

    match format {
        OutputFormat::Text => print_text(&doc, &matches),
        OutputFormat::Json => print_json(&doc, &matches)?,
        OutputFormat::Tsv => print_tsv(&doc, &matches),
    }

    Ok(())
}

fn parse_kwargs<T>(kwargs: serde_json::Value) -> anyhow::Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    if kwargs.is_null() {
        Ok(T::default())
    } else {
        Ok(serde_json::from_value(kwargs)?)
    }
}

fn read_document(path: &PathBuf) -> anyhow::Result<Doc> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading document from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading document {}", path.display()))?
    };
    Ok(whitespace_tokenize(&text))
}

fn print_text(doc: &Doc, matches: &[PatternMatch]) {
    if matches.is_empty() {
        println!("No matches.");
        return;
    }
    for m in matches {
        println!(
            "{:<12} [{:>3}..{:<3}] r={:<3} {}",
            m.label,
            m.start,
            m.end,
            m.ratio,
            doc.window_text(m.start, m.end),
        );
    }
}

fn print_json(doc: &Doc, matches: &[PatternMatch]) -> anyhow::Result<()> {
    let rows: Vec<_> = matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "label": m.label,
                "pattern": m.pattern,
                "start": m.start,
                "end": m.end,
                "ratio": m.ratio,
                "text": doc.window_text(m.start, m.end),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_tsv(doc: &Doc, matches: &[PatternMatch]) {
    println!("label\tpattern\tstart\tend\tratio\ttext");
    for m in matches {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            m.label,
            m.pattern,
            m.start,
            m.end,
            m.ratio,
            doc.window_text(m.start, m.end),
        );
    }
}
