//! Localized narrative tables addressed by enum key and locale.
//!
//! The tables are plain struct literals, so a repeated field is a compile error.
//! [`ContentCatalog::load`] additionally verifies that every section lists each
//! key exactly once, in canonical order, with no empty text, before the catalog
//! is handed to request handlers.

mod en;
mod es;
mod pt;

use serde::Serialize;

use super::domain::{
    Archetype, CorrelationKey, DiagnosticState, Locale, Pillar, PillarTier, QUESTION_COUNT,
};

#[derive(Debug, Clone, Serialize)]
pub struct StateContent {
    pub state: DiagnosticState,
    pub label: &'static str,
    pub one_liner: &'static str,
    pub meaning: &'static str,
    pub characteristics: &'static [&'static str],
    pub primary_risk: &'static str,
    pub recommended_focus: &'static [&'static str],
    pub next_step: &'static str,
    pub immediate_win: &'static str,
    pub no_to_say: &'static str,
    pub mindset_shift: &'static str,
    pub stoic_lesson: &'static str,
    pub stoic_quote: &'static str,
    pub stoic_author: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarContent {
    pub pillar: Pillar,
    pub label: &'static str,
    /// Indexed by [`PillarTier::index`].
    pub tier_insights: [&'static str; 4],
    pub leverage: &'static str,
}

impl PillarContent {
    pub fn insight(&self, tier: PillarTier) -> &'static str {
        self.tier_insights[tier.index()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeContent {
    pub archetype: Archetype,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationContent {
    pub correlation: CorrelationKey,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionContent {
    pub id: u16,
    pub prompt: &'static str,
}

/// Interface copy used around the gated sections of a report.
#[derive(Debug, Clone, Serialize)]
pub struct UiCopy {
    pub likert_scale: [&'static str; 5],
    pub locked_teaser: &'static str,
    pub enrichment_not_requested: &'static str,
    pub enrichment_pending: &'static str,
    pub enrichment_unavailable: &'static str,
}

/// Full content table for one locale.
#[derive(Debug, Clone)]
pub struct LocaleContent {
    pub locale: Locale,
    pub states: [StateContent; 8],
    pub pillars: [PillarContent; 7],
    pub archetypes: [ArchetypeContent; 6],
    pub correlations: [CorrelationContent; 8],
    pub questions: [QuestionContent; QUESTION_COUNT as usize],
    pub ui: UiCopy,
}

/// Read-only content resolver built once at startup.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    default_locale: Locale,
}

impl ContentCatalog {
    /// Builds the catalog and runs the integrity check over every locale table.
    pub fn load(default_locale: Locale) -> Result<Self, ContentError> {
        let catalog = Self { default_locale };
        catalog.verify()?;
        Ok(catalog)
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Parses a requested locale, falling back to the default for unknown or missing codes.
    pub fn resolve_locale(&self, requested: Option<&str>) -> Locale {
        requested
            .and_then(Locale::parse)
            .unwrap_or(self.default_locale)
    }

    pub fn table(&self, locale: Locale) -> &'static LocaleContent {
        match locale {
            Locale::En => &en::CONTENT,
            Locale::Pt => &pt::CONTENT,
            Locale::Es => &es::CONTENT,
        }
    }

    pub fn state(&self, locale: Locale, state: DiagnosticState) -> &'static StateContent {
        &self.table(locale).states[state.index()]
    }

    pub fn pillar(&self, locale: Locale, pillar: Pillar) -> &'static PillarContent {
        &self.table(locale).pillars[pillar.index()]
    }

    pub fn archetype(&self, locale: Locale, archetype: Archetype) -> &'static ArchetypeContent {
        &self.table(locale).archetypes[archetype.index()]
    }

    pub fn correlation(
        &self,
        locale: Locale,
        correlation: CorrelationKey,
    ) -> &'static CorrelationContent {
        &self.table(locale).correlations[correlation.index()]
    }

    pub fn questions(&self, locale: Locale) -> &'static [QuestionContent] {
        &self.table(locale).questions
    }

    pub fn ui(&self, locale: Locale) -> &'static UiCopy {
        &self.table(locale).ui
    }

    pub fn verify(&self) -> Result<(), ContentError> {
        for locale in Locale::ALL {
            verify_table(locale, self.table(locale))?;
        }
        Ok(())
    }
}

fn verify_table(locale: Locale, table: &LocaleContent) -> Result<(), ContentError> {
    if table.locale != locale {
        return Err(ContentError::LocaleMismatch {
            expected: locale.code(),
            found: table.locale.code(),
        });
    }
    let check = FieldCheck { locale };

    for (position, entry) in table.states.iter().enumerate() {
        check.position("states", position, entry.state.index(), entry.state.key())?;
        let key = entry.state.key();
        check.text("states", key, "label", entry.label)?;
        check.text("states", key, "one_liner", entry.one_liner)?;
        check.text("states", key, "meaning", entry.meaning)?;
        check.list("states", key, "characteristics", entry.characteristics)?;
        check.text("states", key, "primary_risk", entry.primary_risk)?;
        check.list("states", key, "recommended_focus", entry.recommended_focus)?;
        check.text("states", key, "next_step", entry.next_step)?;
        check.text("states", key, "immediate_win", entry.immediate_win)?;
        check.text("states", key, "no_to_say", entry.no_to_say)?;
        check.text("states", key, "mindset_shift", entry.mindset_shift)?;
        check.text("states", key, "stoic_lesson", entry.stoic_lesson)?;
        check.text("states", key, "stoic_quote", entry.stoic_quote)?;
        check.text("states", key, "stoic_author", entry.stoic_author)?;
    }

    for (position, entry) in table.pillars.iter().enumerate() {
        check.position("pillars", position, entry.pillar.index(), entry.pillar.key())?;
        let key = entry.pillar.key();
        check.text("pillars", key, "label", entry.label)?;
        check.list("pillars", key, "tier_insights", &entry.tier_insights)?;
        check.text("pillars", key, "leverage", entry.leverage)?;
    }

    for (position, entry) in table.archetypes.iter().enumerate() {
        let key = entry.archetype.key();
        check.position("archetypes", position, entry.archetype.index(), key)?;
        check.text("archetypes", key, "label", entry.label)?;
        check.text("archetypes", key, "description", entry.description)?;
    }

    for (position, entry) in table.correlations.iter().enumerate() {
        let key = entry.correlation.key();
        check.position("correlations", position, entry.correlation.index(), key)?;
        check.text("correlations", key, "text", entry.text)?;
    }

    for (position, entry) in table.questions.iter().enumerate() {
        if usize::from(entry.id) != position + 1 {
            return Err(ContentError::Misordered {
                locale: locale.code(),
                section: "questions",
                position,
                key: format!("question {}", entry.id),
            });
        }
        check.text("questions", "prompt", "prompt", entry.prompt)?;
    }

    check.list("ui", "ui", "likert_scale", &table.ui.likert_scale)?;
    check.text("ui", "ui", "locked_teaser", table.ui.locked_teaser)?;
    check.text("ui", "ui", "enrichment_not_requested", table.ui.enrichment_not_requested)?;
    check.text("ui", "ui", "enrichment_pending", table.ui.enrichment_pending)?;
    check.text("ui", "ui", "enrichment_unavailable", table.ui.enrichment_unavailable)?;

    Ok(())
}

struct FieldCheck {
    locale: Locale,
}

impl FieldCheck {
    fn position(
        &self,
        section: &'static str,
        position: usize,
        index: usize,
        key: &'static str,
    ) -> Result<(), ContentError> {
        if position == index {
            Ok(())
        } else {
            Err(ContentError::Misordered {
                locale: self.locale.code(),
                section,
                position,
                key: key.to_string(),
            })
        }
    }

    fn text(
        &self,
        section: &'static str,
        key: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), ContentError> {
        if value.trim().is_empty() {
            Err(ContentError::EmptyField {
                locale: self.locale.code(),
                section,
                key,
                field,
            })
        } else {
            Ok(())
        }
    }

    fn list(
        &self,
        section: &'static str,
        key: &'static str,
        field: &'static str,
        values: &[&str],
    ) -> Result<(), ContentError> {
        if values.is_empty() {
            return Err(ContentError::EmptyField {
                locale: self.locale.code(),
                section,
                key,
                field,
            });
        }
        for value in values {
            self.text(section, key, field, value)?;
        }
        Ok(())
    }
}

/// Integrity failures in the static content tables.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content table registered for '{expected}' declares locale '{found}'")]
    LocaleMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{locale}: {section} entry '{key}' found at position {position}")]
    Misordered {
        locale: &'static str,
        section: &'static str,
        position: usize,
        key: String,
    },
    #[error("{locale}: {section} entry '{key}' has an empty '{field}'")]
    EmptyField {
        locale: &'static str,
        section: &'static str,
        key: &'static str,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_table_passes_integrity_checks() {
        ContentCatalog::load(Locale::En).expect("content tables are complete");
    }

    #[test]
    fn unknown_locale_resolves_to_configured_default() {
        let catalog = ContentCatalog::load(Locale::Pt).expect("catalog loads");

        assert_eq!(catalog.resolve_locale(Some("fr-FR")), Locale::Pt);
        assert_eq!(catalog.resolve_locale(None), Locale::Pt);
        assert_eq!(catalog.resolve_locale(Some("es")), Locale::Es);
    }

    #[test]
    fn locales_carry_distinct_copy() {
        let catalog = ContentCatalog::load(Locale::En).expect("catalog loads");
        let english = catalog.state(Locale::En, DiagnosticState::Overload);
        let portuguese = catalog.state(Locale::Pt, DiagnosticState::Overload);
        let spanish = catalog.state(Locale::Es, DiagnosticState::Overload);

        assert_ne!(english.one_liner, portuguese.one_liner);
        assert_ne!(english.one_liner, spanish.one_liner);
        assert_ne!(portuguese.one_liner, spanish.one_liner);
    }

    #[test]
    fn state_copy_is_unique_within_a_locale() {
        let catalog = ContentCatalog::load(Locale::En).expect("catalog loads");
        for locale in Locale::ALL {
            let mut one_liners: Vec<&str> = catalog
                .table(locale)
                .states
                .iter()
                .map(|entry| entry.one_liner)
                .collect();
            one_liners.sort_unstable();
            one_liners.dedup();
            assert_eq!(one_liners.len(), DiagnosticState::ALL.len(), "{locale:?}");
        }
    }

    #[test]
    fn verify_rejects_tables_with_blank_fields() {
        let mut table = en::CONTENT.clone();
        table.states[3].next_step = "  ";

        match verify_table(Locale::En, &table) {
            Err(ContentError::EmptyField { key, field, .. }) => {
                assert_eq!(key, "uncertainty");
                assert_eq!(field, "next_step");
            }
            other => panic!("expected empty field error, got {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_swapped_entries() {
        let mut table = pt::CONTENT.clone();
        table.pillars.swap(1, 2);

        assert!(matches!(
            verify_table(Locale::Pt, &table),
            Err(ContentError::Misordered {
                section: "pillars",
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn verify_rejects_tables_registered_under_the_wrong_locale() {
        assert!(matches!(
            verify_table(Locale::Es, &en::CONTENT),
            Err(ContentError::LocaleMismatch { .. })
        ));
    }
}
