//! Weight and volume amounts: parsing operator text into a number plus unit,
//! and rendering amounts back with automatic unit promotion.
//!
//! The leading number is found by manual byte scanning; unit tokens are
//! resolved through [`UNIT_ALIASES`]. See [`crate::servings`] and
//! [`crate::scale`] for the derived-field calculators built on top.

use crate::error::DescribeError;

/// A recognized unit of weight or volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Gram,
    Kilogram,
    Pound,
    Ounce,
    Milliliter,
    Liter,
}

/// Case-insensitive spellings accepted for each [`Unit`].
pub(crate) const UNIT_ALIASES: &[(&str, Unit)] = &[
    ("g", Unit::Gram),
    ("gm", Unit::Gram),
    ("gms", Unit::Gram),
    ("gram", Unit::Gram),
    ("grams", Unit::Gram),
    ("kg", Unit::Kilogram),
    ("kgs", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kilograms", Unit::Kilogram),
    ("lb", Unit::Pound),
    ("lbs", Unit::Pound),
    ("pound", Unit::Pound),
    ("pounds", Unit::Pound),
    ("oz", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("ounces", Unit::Ounce),
    ("ml", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("milliliters", Unit::Milliliter),
    ("millilitre", Unit::Milliliter),
    ("millilitres", Unit::Milliliter),
    ("l", Unit::Liter),
    ("liter", Unit::Liter),
    ("liters", Unit::Liter),
    ("litre", Unit::Liter),
    ("litres", Unit::Liter),
];

const GRAMS_PER_POUND: f64 = 453.592;
const GRAMS_PER_OUNCE: f64 = 28.3495;

impl Unit {
    /// Resolves a unit token such as `"Kilograms"` or `"lbs"`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Unit> {
        let lower = token.to_lowercase();
        UNIT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|(_, unit)| *unit)
    }

    /// Short symbol used when rendering, e.g. `"kg"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
        }
    }

    /// Gram-equivalent of one unit. Volumes count as water-dense, so
    /// `ml` weighs like `g` and `l` like `kg`.
    fn grams_factor(self) -> f64 {
        match self {
            Unit::Gram | Unit::Milliliter => 1.0,
            Unit::Kilogram | Unit::Liter => 1000.0,
            Unit::Pound => GRAMS_PER_POUND,
            Unit::Ounce => GRAMS_PER_OUNCE,
        }
    }
}

/// The unit part of an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountUnit {
    Known(Unit),
    /// Trailing text that is not a recognized unit, kept verbatim
    /// (including any separating whitespace). Empty for a bare number.
    Literal(String),
}

/// A parsed numeric amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub unit: AmountUnit,
}

impl Amount {
    /// Gram-equivalent of this amount. Literal units pass through unchanged.
    #[must_use]
    pub fn grams(&self) -> f64 {
        match &self.unit {
            AmountUnit::Known(unit) => self.value * unit.grams_factor(),
            AmountUnit::Literal(_) => self.value,
        }
    }
}

/// Parses `"500g"`, `"1 kg"`, `"2 lbs"`, `"3 tiers"` and similar.
///
/// # Errors
///
/// Returns [`DescribeError::NotNumeric`] when the text does not start with a
/// number.
pub fn parse_amount(text: &str) -> Result<Amount, DescribeError> {
    let trimmed = text.trim();
    let (number, rest) =
        split_leading_number(trimmed).ok_or_else(|| DescribeError::NotNumeric(text.to_owned()))?;
    let value = number
        .parse::<f64>()
        .map_err(|_| DescribeError::NotNumeric(text.to_owned()))?;

    let unit = match Unit::from_token(rest.trim_start()) {
        Some(unit) => AmountUnit::Known(unit),
        None => AmountUnit::Literal(rest.to_owned()),
    };

    Ok(Amount { value, unit })
}

/// Renders an amount, promoting `g`→`kg` and `ml`→`l` at 1000 and
/// `oz`→`lb` at 16. Values are rounded to two decimals and carry no
/// trailing `.0`.
#[must_use]
pub fn format_amount(value: f64, unit: &AmountUnit) -> String {
    match unit {
        AmountUnit::Known(known) => {
            // Round first so a value that rounds up to the threshold promotes.
            let (value, known) = promote(round_hundredths(value), *known);
            format!("{}{}", format_number(value), known.symbol())
        }
        AmountUnit::Literal(literal) => format!("{}{literal}", format_number(value)),
    }
}

/// Multiplies the amount in `weight` by `multiplier` and re-renders it.
///
/// Text without a leading number is returned unchanged.
#[must_use]
pub fn multiply(weight: &str, multiplier: u32) -> String {
    match parse_amount(weight) {
        Ok(amount) => format_amount(amount.value * f64::from(multiplier), &amount.unit),
        Err(_) => weight.to_owned(),
    }
}

/// Canonical rendering of `weight`, e.g. `"1000 grams"` → `"1kg"`.
#[must_use]
pub fn normalize(weight: &str) -> String {
    multiply(weight, 1)
}

fn promote(value: f64, unit: Unit) -> (f64, Unit) {
    match unit {
        Unit::Gram if value >= 1000.0 => (value / 1000.0, Unit::Kilogram),
        Unit::Milliliter if value >= 1000.0 => (value / 1000.0, Unit::Liter),
        Unit::Ounce if value >= 16.0 => (value / 16.0, Unit::Pound),
        _ => (value, unit),
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_number(value: f64) -> String {
    let rounded = round_hundredths(value);
    // `Display` for f64 already omits a zero fraction ("1", not "1.0").
    format!("{rounded}")
}

/// Splits `s` into a leading decimal number and the remainder.
///
/// Accepts `"12"`, `"12.5"` and `".5"`. Returns `None` if `s` does not start
/// with a digit or a dot followed by a digit.
fn split_leading_number(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let starts_numeric = len > 0
        && (bytes[0].is_ascii_digit()
            || (bytes[0] == b'.' && len > 1 && bytes[1].is_ascii_digit()));
    if !starts_numeric {
        return None;
    }

    let mut i = 0usize;
    let mut has_dot = false;
    while i < len && (bytes[i].is_ascii_digit() || (bytes[i] == b'.' && !has_dot)) {
        if bytes[i] == b'.' {
            has_dot = true;
        }
        i += 1;
    }

    // A trailing dot ("12.") belongs to the rest, not the number.
    if bytes[i - 1] == b'.' {
        i -= 1;
    }

    Some((&s[..i], &s[i..]))
}

#[cfg(test)]
#[path = "units_test.rs"]
mod tests;
