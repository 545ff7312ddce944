//! Cleanup applied to every parsed field: markup tags and template
//! placeholder phrases are removed.

use std::sync::LazyLock;

use regex::Regex;

/// Template phrases left behind by description templates. Matched
/// case-insensitively.
pub(crate) const PLACEHOLDER_PHRASES: &[&str] = &[
    "(Editable per product)",
    "(Template)",
    "(Placeholder)",
    "(To be filled)",
    "(Customize)",
    "(Edit as needed)",
    "(Fill in)",
    "(Enter details)",
    "(Add details)",
];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("valid tag regex"));

static DEFAULT_SANITIZER: LazyLock<Sanitizer> = LazyLock::new(Sanitizer::default);

/// Strips tags and placeholder phrases using the built-in phrase list.
///
/// `sanitize("<strong>Chocolate</strong> (Editable per product)")` yields
/// `"Chocolate"`; text made only of parentheses and whitespace yields `""`.
#[must_use]
pub fn sanitize(fragment: &str) -> String {
    DEFAULT_SANITIZER.sanitize(fragment)
}

/// A sanitizer with the built-in placeholder list plus optional extras.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    placeholders: Vec<Regex>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::with_extra_placeholders(&[])
    }
}

impl Sanitizer {
    /// Builds a sanitizer that also removes each phrase in `extra`.
    #[must_use]
    pub fn with_extra_placeholders(extra: &[String]) -> Self {
        let placeholders = PLACEHOLDER_PHRASES
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str))
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| {
                Regex::new(&format!("(?i){}", regex::escape(phrase)))
                    .expect("escaped phrase is a valid regex")
            })
            .collect();
        Self { placeholders }
    }

    /// Removes tags, then each placeholder phrase, trimming after every
    /// step. Passes repeat until nothing changes, so the result is stable
    /// under a second call.
    #[must_use]
    pub fn sanitize(&self, fragment: &str) -> String {
        let mut current = fragment.trim().to_owned();
        loop {
            let next = self.pass(&current);
            if next == current {
                break;
            }
            current = next;
        }

        if is_only_parens(&current) {
            String::new()
        } else {
            current
        }
    }

    fn pass(&self, text: &str) -> String {
        let mut out = TAG_RE.replace_all(text, "").trim().to_owned();
        for placeholder in &self.placeholders {
            out = placeholder.replace_all(&out, "").trim().to_owned();
        }
        out
    }
}

fn is_only_parens(text: &str) -> bool {
    text.chars()
        .all(|c| c == '(' || c == ')' || c.is_whitespace())
}
