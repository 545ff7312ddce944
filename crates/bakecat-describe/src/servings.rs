//! Servings derived from cake weight.

use crate::units::parse_amount;

/// Grams in the smallest portion; bounds the low end of the range.
const GRAMS_PER_LARGE_SERVING: f64 = 100.0;
/// Grams in the largest portion; bounds the high end of the range.
const GRAMS_PER_SMALL_SERVING: f64 = 83.33;

/// Estimates servings for a weight, e.g. `"500g"` → `"5–6 servings"`.
///
/// The low end is `floor(grams / 100)` and the high end
/// `round(grams / 83.33)`. When both agree a single count is returned.
/// Unparseable weights yield `"0 servings"`.
#[must_use]
pub fn calculate_servings(weight: &str) -> String {
    match parse_amount(weight) {
        Ok(amount) => servings_for_grams(amount.grams()),
        Err(_) => pluralize(0),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn servings_for_grams(grams: f64) -> String {
    let min = (grams / GRAMS_PER_LARGE_SERVING).floor().max(0.0) as u64;
    let max = (grams / GRAMS_PER_SMALL_SERVING).round().max(0.0) as u64;

    if min == max {
        pluralize(min)
    } else {
        format!("{min}–{max} servings")
    }
}

fn pluralize(count: u64) -> String {
    if count == 1 {
        "1 serving".to_owned()
    } else {
        format!("{count} servings")
    }
}
