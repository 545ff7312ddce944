//! Command handlers for the CLI.
//!
//! Each handler takes already-read input and returns the text to print, so
//! `main` owns all I/O.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use bakecat_core::{DescriptionRecord, DescriptionSettings};
use bakecat_describe::{generate_record, parse_description_with, parse_price, size_variants, Sanitizer};

/// Reads `file`, or stdin when `None`.
pub(crate) fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Canonical text → pretty JSON of the parsed description.
pub(crate) fn run_parse(text: &str, settings: &DescriptionSettings) -> anyhow::Result<String> {
    let sanitizer = Sanitizer::with_extra_placeholders(&settings.extra_placeholders);
    let parsed = parse_description_with(text, &sanitizer);
    serde_json::to_string_pretty(&parsed).context("failed to serialize parsed description")
}

/// Record JSON → canonical text.
pub(crate) fn run_generate(json: &str) -> anyhow::Result<String> {
    let record: DescriptionRecord =
        serde_json::from_str(json).context("input is not a valid description record")?;
    Ok(generate_record(&record))
}

/// Size ladder as pretty JSON.
pub(crate) fn run_variants(weight: &str, price: Option<&str>, count: u32) -> anyhow::Result<String> {
    let base_price = price.map(parse_price).transpose()?;
    let variants = size_variants(weight, base_price, count)?;
    serde_json::to_string_pretty(&variants).context("failed to serialize size variants")
}

/// Parses `text`, regenerates it, and checks that parsing the regenerated
/// text yields the same record. Returns the regenerated text.
pub(crate) fn run_roundtrip(text: &str, settings: &DescriptionSettings) -> anyhow::Result<String> {
    let sanitizer = Sanitizer::with_extra_placeholders(&settings.extra_placeholders);

    let mut record = DescriptionRecord::with_please_note("");
    record.merge_parsed(parse_description_with(text, &sanitizer));
    let regenerated = generate_record(&record);

    let mut reparsed = DescriptionRecord::with_please_note("");
    reparsed.merge_parsed(parse_description_with(&regenerated, &sanitizer));

    if reparsed != record {
        tracing::warn!(?record, ?reparsed, "description did not survive round trip");
        anyhow::bail!("round trip changed the description record");
    }

    Ok(regenerated)
}
