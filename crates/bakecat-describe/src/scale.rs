//! Size-variant generation: the base weight and price scaled 1×, 2×, 3×, …

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DescribeError;
use crate::servings::calculate_servings;
use crate::units::multiply;

/// One generated size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub multiplier: u32,
    /// Scaled weight, e.g. `"1kg"` for `2 × 500g`.
    pub weight: String,
    pub servings: String,
    /// Scaled price; absent when no base price was given.
    pub price: Option<Decimal>,
}

/// Scales `weight` by `multiplier`, e.g. `("500g", 2)` → `"1kg"`.
///
/// Non-numeric weights are returned unchanged.
#[must_use]
pub fn scale_weight(weight: &str, multiplier: u32) -> String {
    multiply(weight, multiplier)
}

/// Builds `count` variants of a base size, multipliers `1..=count`.
///
/// The first variant is the base size itself with its weight normalized.
///
/// # Errors
///
/// Returns [`DescribeError::InvalidPrice`] if a scaled price does not fit in
/// a `Decimal`.
pub fn size_variants(
    base_weight: &str,
    base_price: Option<Decimal>,
    count: u32,
) -> Result<Vec<SizeVariant>, DescribeError> {
    (1..=count)
        .map(|multiplier| {
            let price = base_price
                .map(|price| scale_price(price, multiplier))
                .transpose()?;
            let weight = scale_weight(base_weight, multiplier);
            let servings = calculate_servings(&weight);
            Ok(SizeVariant {
                multiplier,
                weight,
                servings,
                price,
            })
        })
        .collect()
}

fn scale_price(price: Decimal, multiplier: u32) -> Result<Decimal, DescribeError> {
    price
        .checked_mul(Decimal::from(multiplier))
        .ok_or_else(|| DescribeError::InvalidPrice {
            input: price.to_string(),
            reason: format!("price overflows at {multiplier}×"),
        })
}

/// Parses an operator-entered price such as `"12.50"` or `"$12.50"`.
///
/// # Errors
///
/// Returns [`DescribeError::InvalidPrice`] if the text is not a decimal
/// number or is negative.
pub fn parse_price(input: &str) -> Result<Decimal, DescribeError> {
    let raw = input.trim().trim_start_matches('$').trim();
    let price = Decimal::from_str(raw).map_err(|e| DescribeError::InvalidPrice {
        input: input.to_owned(),
        reason: e.to_string(),
    })?;

    if price.is_sign_negative() {
        return Err(DescribeError::InvalidPrice {
            input: input.to_owned(),
            reason: "price must not be negative".to_owned(),
        });
    }

    Ok(price)
}
