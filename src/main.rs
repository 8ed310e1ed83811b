//! Line-oriented console driver.
//!
//! Input format, one item per line: the stop words, the document count N,
//! then for each of N documents its text followed by its ratings (whitespace
//! separated integers, possibly none), and finally the query. Documents that
//! fail validation are skipped with a warning; the rest keep ingesting.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use docrank::cli::Cli;
use docrank::{DocumentStatus, ScoredDocument, SearchEngine, paginate};

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    lines
        .next()
        .context("unexpected end of input")?
        .context("failed to read from stdin")
}

fn parse_ratings(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|word| {
            word.parse()
                .with_context(|| format!("bad rating '{word}'"))
        })
        .collect()
}

fn build_engine(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<SearchEngine> {
    let stop_words = read_line(lines)?;
    let mut engine =
        SearchEngine::with_stop_word_text(&stop_words).context("invalid stop words")?;

    let document_count: usize = read_line(lines)?
        .trim()
        .parse()
        .context("expected a document count")?;

    let started = Instant::now();
    for id in 0..document_count {
        let text = read_line(lines)?;
        let ratings_line = read_line(lines)?;
        let outcome = parse_ratings(&ratings_line).and_then(|ratings| {
            engine
                .add_document(id as i32, &text, DocumentStatus::Actual, &ratings)
                .map_err(Into::into)
        });
        if let Err(e) = outcome {
            tracing::warn!("skipping document {id}: {e:#}");
        }
    }
    tracing::info!(
        documents = engine.document_count(),
        elapsed = ?started.elapsed(),
        "finished ingesting"
    );
    Ok(engine)
}

fn print_results(results: &[ScoredDocument], cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        for document in results {
            writeln!(out, "{}", serde_json::to_string(document)?)?;
        }
        return Ok(());
    }
    for page in paginate(results, cli.page_size) {
        for document in page.items {
            writeln!(out, "{document}")?;
        }
        writeln!(out, "Page break")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    docrank::tracing::init(if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let engine = build_engine(&mut lines)?;
    let query = read_line(&mut lines)?;
    let results = engine.find_top_documents(&query)?;

    print_results(&results, &cli)
}
