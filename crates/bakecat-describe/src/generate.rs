//! Renders a structured description record as canonical text.

use bakecat_core::{DescriptionRecord, DetailField, ProductDetails};

/// Header line opening the key-value section.
pub const DETAILS_HEADER: &str = "Product Details:";
/// Header line opening the bulleted note section.
pub const PLEASE_NOTE_HEADER: &str = "Please Note:";

/// Builds canonical description text.
///
/// Sections are separated by a blank line and omitted when empty:
///
/// ```text
/// A lovely cake.
///
/// Product Details:
/// Cake Flavour: Chocolate
/// Weight: 1kg
///
/// Please Note:
/// • Standard note.
/// ```
///
/// Detail lines always follow the order of [`DetailField::labelled`].
#[must_use]
pub fn generate_description(overview: &str, details: &ProductDetails, please_note: &str) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(3);

    let overview = overview.trim();
    if !overview.is_empty() {
        sections.push(overview.to_owned());
    }

    let detail_lines: Vec<String> = DetailField::labelled()
        .iter()
        .filter_map(|(field, label)| {
            let value = details.get(*field).trim();
            (!value.is_empty()).then(|| format!("{label} {value}"))
        })
        .collect();
    if !detail_lines.is_empty() {
        sections.push(format!("{DETAILS_HEADER}\n{}", detail_lines.join("\n")));
    }

    if !please_note.trim().is_empty() {
        sections.push(format!("{PLEASE_NOTE_HEADER}\n{please_note}"));
    }

    sections.join("\n\n").trim_end().to_owned()
}

/// [`generate_description`] over a whole record.
#[must_use]
pub fn generate_record(record: &DescriptionRecord) -> String {
    generate_description(&record.overview, &record.details, &record.please_note)
}

#[cfg(test)]
mod tests {
    use bakecat_core::Version;

    use super::*;

    #[test]
    fn all_empty_is_empty_string() {
        assert_eq!(
            generate_description("", &ProductDetails::default(), ""),
            ""
        );
        assert_eq!(
            generate_description("  ", &ProductDetails::default(), " \n "),
            ""
        );
    }

    #[test]
    fn overview_only_is_trimmed_overview() {
        assert_eq!(
            generate_description("  A lovely cake.  \n", &ProductDetails::default(), ""),
            "A lovely cake."
        );
    }

    #[test]
    fn full_layout() {
        let details = ProductDetails {
            cake_flavour: "Chocolate".to_owned(),
            weight: "1kg".to_owned(),
            ..ProductDetails::default()
        };
        assert_eq!(
            generate_description("A lovely cake.", &details, "• Standard note."),
            "A lovely cake.\n\nProduct Details:\nCake Flavour: Chocolate\nWeight: 1kg\n\nPlease Note:\n• Standard note."
        );
    }

    #[test]
    fn detail_lines_in_fixed_order() {
        let details = ProductDetails {
            country_of_origin: "Belgium".to_owned(),
            weight: "500g".to_owned(),
            toppings: "Berries".to_owned(),
            servings: "5–6 servings".to_owned(),
            shape: "Heart".to_owned(),
            version: Version::Eggless,
            cake_flavour: "Red Velvet".to_owned(),
        };
        assert_eq!(
            generate_description("", &details, ""),
            "Product Details:\n\
             Cake Flavour: Red Velvet\n\
             Version: Eggless\n\
             Shape: Heart\n\
             Servings: 5–6 servings\n\
             Toppings: Berries\n\
             Weight: 500g\n\
             Country of Origin: Belgium"
        );
    }

    #[test]
    fn unset_version_and_blank_fields_omitted() {
        let details = ProductDetails {
            shape: "   ".to_owned(),
            toppings: "Nuts".to_owned(),
            ..ProductDetails::default()
        };
        assert_eq!(
            generate_description("", &details, ""),
            "Product Details:\nToppings: Nuts"
        );
    }

    #[test]
    fn whitespace_only_details_emit_no_header() {
        let details = ProductDetails {
            shape: " ".to_owned(),
            ..ProductDetails::default()
        };
        assert_eq!(generate_description("Hi", &details, ""), "Hi");
    }

    #[test]
    fn note_only() {
        assert_eq!(
            generate_description("", &ProductDetails::default(), "• One\n• Two\n"),
            "Please Note:\n• One\n• Two"
        );
    }

    #[test]
    fn generate_record_matches_parts() {
        let record = DescriptionRecord {
            overview: "Soft sponge.".to_owned(),
            details: ProductDetails {
                version: Version::Egg,
                ..ProductDetails::default()
            },
            please_note: "• Note".to_owned(),
        };
        assert_eq!(
            generate_record(&record),
            "Soft sponge.\n\nProduct Details:\nVersion: Egg\n\nPlease Note:\n• Note"
        );
    }
}
