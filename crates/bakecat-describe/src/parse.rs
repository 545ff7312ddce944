//! Canonical description text → structured record.
//!
//! The text is scanned line by line through three zones: free-form
//! overview, the "Product Details:" key-value block, and the "Please Note:"
//! bullet block. Unrecognized lines are skipped rather than rejected, so
//! legacy and hand-edited descriptions still yield whatever fields they
//! carry. See [`crate::generate`] for the inverse.

use bakecat_core::{DetailField, ParsedDescription, ProductDetails, Version};

use crate::generate::{DETAILS_HEADER, PLEASE_NOTE_HEADER};
use crate::sanitize::{sanitize, Sanitizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Overview,
    Details,
    PleaseNote,
}

/// Parses canonical text using the built-in placeholder list.
#[must_use]
pub fn parse_description(text: &str) -> ParsedDescription {
    scan(text, sanitize)
}

/// Parses canonical text, cleaning every field with `sanitizer`.
#[must_use]
pub fn parse_description_with(text: &str, sanitizer: &Sanitizer) -> ParsedDescription {
    scan(text, |fragment| sanitizer.sanitize(fragment))
}

fn scan(text: &str, clean: impl Fn(&str) -> String) -> ParsedDescription {
    let mut zone = Zone::Overview;
    let mut overview: Vec<String> = Vec::new();
    let mut details = ProductDetails::default();
    let mut note: Option<Vec<String>> = None;

    for line in text.lines() {
        if line.contains(DETAILS_HEADER) {
            zone = Zone::Details;
            continue;
        }
        if line.contains(PLEASE_NOTE_HEADER) {
            // A repeated section replaces, never extends, the earlier one.
            zone = Zone::PleaseNote;
            note = Some(Vec::new());
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match zone {
            Zone::Overview => {
                let cleaned = clean(trimmed);
                if !cleaned.is_empty() {
                    overview.push(cleaned);
                }
            }
            Zone::Details => parse_detail_line(trimmed, &mut details, &clean),
            Zone::PleaseNote => {
                if trimmed.starts_with('•') {
                    let cleaned = clean(trimmed);
                    if !cleaned.is_empty() {
                        note.get_or_insert_with(Vec::new).push(cleaned);
                    }
                }
            }
        }
    }

    ParsedDescription {
        overview: overview.join(" "),
        details,
        please_note: note.map(|lines| lines.join("\n")),
    }
}

/// Assigns the field named by `line`'s label prefix. Labels match
/// case-sensitively; lines without a known label are ignored.
fn parse_detail_line(line: &str, details: &mut ProductDetails, clean: &impl Fn(&str) -> String) {
    let matched = DetailField::labelled()
        .iter()
        .find_map(|(field, label)| line.strip_prefix(label).map(|rest| (*field, rest)));

    let Some((field, rest)) = matched else {
        tracing::debug!(line, "skipping unrecognized detail line");
        return;
    };

    let value = clean(rest);
    if field == DetailField::Version {
        let version = Version::from_label(&value);
        if !version.is_set() && !value.is_empty() {
            tracing::debug!(value = %value, "rejecting unknown version value");
        }
        details.version = version;
    } else {
        details.set(field, value);
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
