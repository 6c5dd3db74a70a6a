use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use asn_ingest::{PageBatch, read_pages};
use asn_match::best_match;
use asn_model::{RawRecord, RejectReason};
use asn_transform::{normalize_aircraft, normalize_incident};

use crate::cli::{ExtractArgs, ReconcileArgs, RecordFormatArg};
use crate::types::{ExtractOutcome, RecordKind};

pub fn run_incidents(args: &ExtractArgs) -> Result<ExtractOutcome> {
    run_extract(args, RecordKind::Incidents, normalize_incident)
}

pub fn run_aircraft(args: &ExtractArgs) -> Result<ExtractOutcome> {
    run_extract(args, RecordKind::Aircraft, normalize_aircraft)
}

/// Shared extraction flow: read pages, normalize each one independently,
/// write the accepted records. One bad page never aborts the batch.
fn run_extract<T, F>(args: &ExtractArgs, kind: RecordKind, normalize: F) -> Result<ExtractOutcome>
where
    T: Serialize,
    F: Fn(&RawRecord, &str) -> Result<T, RejectReason>,
{
    let span = info_span!("extract", kind = kind.as_str());
    let _guard = span.enter();

    let batch = read_input(&args.input)?;
    info!(
        pages = batch.pages.len(),
        skipped = batch.skipped,
        "input read"
    );

    let mut records = Vec::new();
    let mut rejected: BTreeMap<String, usize> = BTreeMap::new();
    for page in &batch.pages {
        let raw = page.to_raw_record();
        match normalize(&raw, &page.source) {
            Ok(record) => records.push(record),
            Err(reason) => {
                *rejected.entry(reason.to_string()).or_default() += 1;
            }
        }
        debug!(source = %page.source, "page processed");
    }

    write_records(&records, args.format, args.output.as_deref())?;

    let outcome = ExtractOutcome {
        kind,
        pages: batch.pages.len(),
        skipped_lines: batch.skipped,
        emitted: records.len(),
        rejected,
        output: args.output.clone(),
    };
    info!(
        emitted = outcome.emitted,
        rejected = outcome.rejected_total(),
        "extraction finished"
    );
    Ok(outcome)
}

/// Best fuzzy match for each value against the vocabulary file.
pub fn run_reconcile(args: &ReconcileArgs) -> Result<Vec<(String, asn_match::Match)>> {
    let vocabulary = read_vocabulary(&args.vocab)
        .with_context(|| format!("read vocabulary {}", args.vocab.display()))?;
    info!(candidates = vocabulary.len(), "vocabulary loaded");

    Ok(args
        .values
        .iter()
        .map(|value| {
            let found = best_match(value, vocabulary.iter().map(String::as_str));
            (value.clone(), found)
        })
        .collect())
}

fn read_input(input: &Path) -> Result<PageBatch> {
    if input == Path::new("-") {
        read_pages(io::stdin().lock()).context("read pages from stdin")
    } else {
        let file = File::open(input).with_context(|| format!("open {}", input.display()))?;
        read_pages(BufReader::new(file))
            .with_context(|| format!("read pages from {}", input.display()))
    }
}

fn read_vocabulary(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut candidates = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    Ok(candidates)
}

fn write_records<T: Serialize>(
    records: &[T],
    format: RecordFormatArg,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match format {
        RecordFormatArg::Json => {
            for record in records {
                let line = serde_json::to_string(record).context("serialize record")?;
                writeln!(writer, "{line}")?;
            }
        }
        RecordFormatArg::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for record in records {
                csv_writer.serialize(record).context("serialize record")?;
            }
            csv_writer.flush()?;
            return Ok(());
        }
    }
    writer.flush()?;
    Ok(())
}
