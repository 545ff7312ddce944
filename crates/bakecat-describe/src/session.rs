//! Host-side wiring of record, auto-population rules and sync guard, as a
//! product form uses them while an operator authors a description.

use bakecat_core::{DescriptionRecord, DescriptionSettings, DetailField};

use crate::autofill::AutoPopulator;
use crate::generate::generate_record;
use crate::parse::parse_description_with;
use crate::sanitize::Sanitizer;
use crate::sync::{SyncGuard, SyncState};

/// Editing state for one product description.
///
/// The host pushes stored text in with [`load`](Self::load), applies
/// operator edits, and calls [`regenerate`](Self::regenerate) to obtain the
/// text to persist. [`tick`](Self::tick) must run once per host update
/// cycle to release the sync guard.
#[derive(Debug, Clone)]
pub struct DescriptionSession {
    record: DescriptionRecord,
    rules: AutoPopulator,
    guard: SyncGuard,
    canonical: String,
    sanitizer: Sanitizer,
}

impl Default for DescriptionSession {
    fn default() -> Self {
        Self::with_settings(&DescriptionSettings::default())
    }
}

impl DescriptionSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose record starts with the configured default note and
    /// whose parser strips the configured extra placeholders.
    #[must_use]
    pub fn with_settings(settings: &DescriptionSettings) -> Self {
        Self {
            record: DescriptionRecord::with_please_note(settings.default_please_note.clone()),
            rules: AutoPopulator::new(),
            guard: SyncGuard::new(),
            canonical: String::new(),
            sanitizer: Sanitizer::with_extra_placeholders(&settings.extra_placeholders),
        }
    }

    #[must_use]
    pub fn record(&self) -> &DescriptionRecord {
        &self.record
    }

    /// Last canonical text loaded or emitted.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Overview text, handed to the sibling short-description field.
    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.record.overview
    }

    #[must_use]
    pub fn sync_state(&self) -> SyncState {
        self.guard.state()
    }

    /// Absorbs canonical text supplied by the host.
    ///
    /// Text arriving mid-sync is the echo of our own output and is ignored.
    /// Fields the text does not carry keep their current values. Returns
    /// `true` if the record changed.
    pub fn load(&mut self, text: &str) -> bool {
        if self.guard.is_syncing() {
            tracing::debug!("ignoring canonical text received during sync");
            return false;
        }
        if text == self.canonical {
            return false;
        }

        self.guard.try_begin();
        self.canonical = text.to_owned();
        let parsed = parse_description_with(text, &self.sanitizer);
        let changed = self.record.merge_parsed(parsed);
        tracing::debug!(changed, "loaded canonical description");
        changed
    }

    /// Produces canonical text for the current record, or `None` when a
    /// sync is in flight or the text would not change.
    pub fn regenerate(&mut self) -> Option<String> {
        if self.guard.is_syncing() {
            return None;
        }

        let text = generate_record(&self.record);
        if text == self.canonical {
            return None;
        }

        self.guard.try_begin();
        self.canonical.clone_from(&text);
        Some(text)
    }

    /// Releases the sync guard; call once per host update cycle.
    pub fn tick(&mut self) {
        self.guard.tick();
    }

    pub fn set_overview(&mut self, overview: &str) {
        overview.clone_into(&mut self.record.overview);
    }

    pub fn set_please_note(&mut self, please_note: &str) {
        please_note.clone_into(&mut self.record.please_note);
    }

    /// Applies an operator edit to one detail field. Weight edits go through
    /// the auto-population rules so servings follow.
    pub fn edit(&mut self, field: DetailField, value: &str) -> bool {
        let details = &mut self.record.details;
        match field {
            DetailField::Weight => self.rules.on_weight_edited(details, value),
            DetailField::Servings => self.rules.on_servings_edited(details, value),
            _ => {
                if details.get(field) == value {
                    return false;
                }
                details.set(field, value);
                true
            }
        }
    }

    /// Primary subcategory changed; fills an empty flavour.
    pub fn select_subcategory(&mut self, display_name: Option<&str>) -> bool {
        self.rules
            .on_subcategory_changed(&mut self.record.details, display_name)
    }

    /// Base weight or first size variant changed upstream.
    pub fn set_source_weight(
        &mut self,
        base_weight: Option<&str>,
        first_variant_weight: Option<&str>,
    ) -> bool {
        self.rules.on_source_weight_changed(
            &mut self.record.details,
            base_weight,
            first_variant_weight,
        )
    }
}
