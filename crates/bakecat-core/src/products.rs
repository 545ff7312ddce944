use serde::{Deserialize, Serialize};

/// Please-note block used when a product has no prior note.
pub const DEFAULT_PLEASE_NOTE: &str = "• Colours and decorations may vary slightly from the photo.\n\
• Keep refrigerated and consume within 2 days of delivery.\n\
• Cake boards and toppers are not edible.";

/// Whether a cake is baked with or without egg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    Egg,
    Eggless,
    #[default]
    Unset,
}

impl Version {
    /// Accepts exactly `"Egg"` or `"Eggless"`; anything else is [`Version::Unset`].
    #[must_use]
    pub fn from_label(s: &str) -> Self {
        match s {
            "Egg" => Version::Egg,
            "Eggless" => Version::Eggless,
            _ => Version::Unset,
        }
    }

    /// Display text; empty for [`Version::Unset`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Version::Egg => "Egg",
            Version::Eggless => "Eggless",
            Version::Unset => "",
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self != Version::Unset
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named field of [`ProductDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailField {
    CakeFlavour,
    Version,
    Shape,
    Servings,
    Toppings,
    Weight,
    CountryOfOrigin,
}

/// Canonical label prefixes, in the order the "Product Details:" section
/// renders them.
static FIELD_LABELS: [(DetailField, &str); 7] = [
    (DetailField::CakeFlavour, "Cake Flavour:"),
    (DetailField::Version, "Version:"),
    (DetailField::Shape, "Shape:"),
    (DetailField::Servings, "Servings:"),
    (DetailField::Toppings, "Toppings:"),
    (DetailField::Weight, "Weight:"),
    (DetailField::CountryOfOrigin, "Country of Origin:"),
];

impl DetailField {
    /// All fields paired with their label prefix, in render order.
    #[must_use]
    pub fn labelled() -> &'static [(DetailField, &'static str)] {
        &FIELD_LABELS
    }

    /// Label prefix including the trailing colon, e.g. `"Cake Flavour:"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        FIELD_LABELS
            .iter()
            .find(|(field, _)| *field == self)
            .map_or("", |(_, label)| *label)
    }
}

/// The structured half of a product description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetails {
    pub cake_flavour: String,
    pub version: Version,
    pub shape: String,
    /// Human-readable range derived from `weight`, e.g. `"5–6 servings"`.
    pub servings: String,
    pub toppings: String,
    /// Amount plus unit, e.g. `"500g"`.
    pub weight: String,
    pub country_of_origin: String,
}

impl ProductDetails {
    /// Returns the text of `field`; [`Version::Unset`] reads as empty.
    #[must_use]
    pub fn get(&self, field: DetailField) -> &str {
        match field {
            DetailField::CakeFlavour => &self.cake_flavour,
            DetailField::Version => self.version.as_str(),
            DetailField::Shape => &self.shape,
            DetailField::Servings => &self.servings,
            DetailField::Toppings => &self.toppings,
            DetailField::Weight => &self.weight,
            DetailField::CountryOfOrigin => &self.country_of_origin,
        }
    }

    /// Assigns `value` to `field`. The version field only accepts
    /// `"Egg"`/`"Eggless"` and resets to unset otherwise.
    pub fn set(&mut self, field: DetailField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DetailField::CakeFlavour => self.cake_flavour = value,
            DetailField::Version => self.version = Version::from_label(&value),
            DetailField::Shape => self.shape = value,
            DetailField::Servings => self.servings = value,
            DetailField::Toppings => self.toppings = value,
            DetailField::Weight => self.weight = value,
            DetailField::CountryOfOrigin => self.country_of_origin = value,
        }
    }

    /// `true` when every field is empty and the version is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DetailField::labelled()
            .iter()
            .all(|(field, _)| self.get(*field).is_empty())
    }

    /// `true` when any of the fields that identify a real details block
    /// (flavour, weight, servings, toppings) carries a value.
    #[must_use]
    pub fn has_core_fields(&self) -> bool {
        !(self.cake_flavour.is_empty()
            && self.weight.is_empty()
            && self.servings.is_empty()
            && self.toppings.is_empty())
    }
}

/// Result of parsing canonical description text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDescription {
    pub overview: String,
    pub details: ProductDetails,
    /// `None` when the text has no "Please Note:" section at all.
    pub please_note: Option<String>,
}

/// The structured field record a product form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionRecord {
    pub overview: String,
    pub details: ProductDetails,
    pub please_note: String,
}

impl Default for DescriptionRecord {
    fn default() -> Self {
        Self {
            overview: String::new(),
            details: ProductDetails::default(),
            please_note: DEFAULT_PLEASE_NOTE.to_string(),
        }
    }
}

impl DescriptionRecord {
    /// Creates an empty record whose please note starts as `please_note`.
    #[must_use]
    pub fn with_please_note(please_note: impl Into<String>) -> Self {
        Self {
            please_note: please_note.into(),
            ..Self::default()
        }
    }

    /// Folds a parse result into this record without blanking fields that
    /// the parsed text did not supply.
    ///
    /// - the overview is replaced only by a non-empty parsed overview;
    /// - details are replaced only when flavour, weight, servings or
    ///   toppings was recognized;
    /// - the please note is replaced only when the text had a "Please Note:"
    ///   section whose value differs from the current one.
    ///
    /// Returns `true` if anything changed.
    pub fn merge_parsed(&mut self, parsed: ParsedDescription) -> bool {
        let mut changed = false;

        if !parsed.overview.is_empty() && parsed.overview != self.overview {
            self.overview = parsed.overview;
            changed = true;
        }

        if parsed.details.has_core_fields() && parsed.details != self.details {
            self.details = parsed.details;
            changed = true;
        }

        if let Some(note) = parsed.please_note {
            if note != self.please_note {
                self.please_note = note;
                changed = true;
            }
        }

        changed
    }
}

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
