//! One-way rules that fill detail fields from related product inputs.
//!
//! - subcategory → cake flavour, only while the flavour is empty;
//! - base weight (or first size variant) → weight, unless the operator has
//!   edited the weight since the source last changed;
//! - weight → servings, recomputed on every weight change, overwriting any
//!   hand-typed servings.

use bakecat_core::ProductDetails;

use crate::sanitize::sanitize;
use crate::servings::calculate_servings;
use crate::units::normalize;

/// Tracks the state the weight rule needs between evaluations.
#[derive(Debug, Clone, Default)]
pub struct AutoPopulator {
    weight_manually_edited: bool,
    last_source_weight: Option<String>,
}

impl AutoPopulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while an operator weight edit is protected from the source.
    #[must_use]
    pub fn weight_manually_edited(&self) -> bool {
        self.weight_manually_edited
    }

    /// Fills `cake_flavour` from the primary subcategory's display name.
    /// Never overwrites an existing flavour. Returns `true` if it fired.
    pub fn on_subcategory_changed(
        &self,
        details: &mut ProductDetails,
        display_name: Option<&str>,
    ) -> bool {
        if !details.cake_flavour.is_empty() {
            return false;
        }

        let Some(name) = display_name.map(sanitize).filter(|n| !n.is_empty()) else {
            return false;
        };

        tracing::debug!(flavour = %name, "cake flavour filled from subcategory");
        details.cake_flavour = name;
        true
    }

    /// Fills `weight` from the base weight, falling back to the first size
    /// variant's weight. A source different from the last one seen clears
    /// the manual-edit flag. Returns `true` if the weight changed.
    pub fn on_source_weight_changed(
        &mut self,
        details: &mut ProductDetails,
        base_weight: Option<&str>,
        first_variant_weight: Option<&str>,
    ) -> bool {
        let Some(source) = non_blank(base_weight).or_else(|| non_blank(first_variant_weight))
        else {
            return false;
        };

        if self.last_source_weight.as_deref() != Some(source) {
            self.last_source_weight = Some(source.to_owned());
            self.weight_manually_edited = false;
        }

        if self.weight_manually_edited && !details.weight.is_empty() {
            tracing::debug!(weight = %details.weight, "keeping manually edited weight");
            return false;
        }

        let changed = assign_weight(details, normalize(source));
        if changed {
            tracing::debug!(weight = %details.weight, "weight filled from source");
        }
        changed
    }

    /// Records an operator edit of the weight field.
    pub fn on_weight_edited(&mut self, details: &mut ProductDetails, value: &str) -> bool {
        self.weight_manually_edited = true;
        assign_weight(details, value.to_owned())
    }

    /// Records an operator edit of the servings field. The value holds only
    /// until the weight next changes.
    pub fn on_servings_edited(&self, details: &mut ProductDetails, value: &str) -> bool {
        if details.servings == value {
            return false;
        }
        details.servings = value.to_owned();
        true
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Sets the weight and, when it actually changed, recomputes servings.
/// A blank weight yields `"0 servings"` like any other non-numeric weight.
fn assign_weight(details: &mut ProductDetails, weight: String) -> bool {
    if details.weight == weight {
        return false;
    }

    details.weight = weight;
    details.servings = calculate_servings(&details.weight);
    true
}
