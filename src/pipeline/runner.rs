//! Main resolution pipeline

use super::{LanguageOutput, PipelineInput, PipelineOutput, PipelineSources};
use crate::builder::{EntityBuilder, NeutralTiers};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ids::IdentifierMap;
use crate::linker::{link_talents, Linker};
use crate::model::{Entity, Localized};
use crate::patch::{NameIndex, PatchComposer};
use crate::tokens::TokenStore;

/// Batch transform from raw trees to id-stamped, localized records
///
/// Lookup tables are read-only after construction, so one pipeline can run
/// any number of inputs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    tokens: TokenStore,
    ids: IdentifierMap,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, tokens: TokenStore, ids: IdentifierMap) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tokens,
            ids,
        })
    }

    /// Build the token store and identifier map from raw trees
    pub fn from_sources(config: PipelineConfig, sources: &PipelineSources) -> Result<Self> {
        config.validate()?;
        let mut tokens = TokenStore::new(config.default_language.clone());
        for (language, trees) in &sources.tokens {
            tokens.load(language, trees)?;
        }
        let ids = IdentifierMap::from_tree(&sources.ids)?;
        Self::new(config, tokens, ids)
    }

    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[inline]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    #[inline]
    pub fn ids(&self) -> &IdentifierMap {
        &self.ids
    }

    /// Run every configured language and fan out to its locales
    pub fn run(&self, input: &PipelineInput) -> PipelineOutput {
        let tiers = input
            .neutral_items
            .as_ref()
            .map(NeutralTiers::from_tree)
            .unwrap_or_default();

        let mut output = PipelineOutput::default();
        for (language, locales) in &self.config.languages {
            let resolved = self.run_language(language, input, &tiers);
            tracing::info!(
                language = %language,
                abilities = resolved.abilities.len(),
                talents = resolved.talents.len(),
                heroes = resolved.heroes.len(),
                items = resolved.items.len(),
                patches = resolved.patch_notes.len(),
                failures = resolved.failures.len(),
                "Resolved language"
            );

            for locale in locales {
                stamp(&mut output.abilities, &resolved.abilities, locale);
                stamp(&mut output.talents, &resolved.talents, locale);
                stamp(&mut output.heroes, &resolved.heroes, locale);
                stamp(&mut output.items, &resolved.items, locale);
                stamp(&mut output.patch_notes, &resolved.patch_notes, locale);
            }
            output.failures.extend(resolved.failures);
        }
        output
    }

    /// Build, resolve and link every record of one source language
    pub fn run_language(
        &self,
        language: &str,
        input: &PipelineInput,
        tiers: &NeutralTiers,
    ) -> LanguageOutput {
        let builder = EntityBuilder::new(&self.tokens, &self.ids, &self.config);
        let format = builder.number_format(language);

        let (abilities, mut talents) = builder.build_abilities(language, &input.abilities);
        link_talents(&mut talents.records, &abilities.records, format);

        let items = builder.build_items(language, &input.items, tiers);

        let mut heroes = builder.build_heroes(language, &input.heroes);
        let linker = Linker::new(&abilities.records, &talents.records, &self.config);
        for hero in heroes.records.iter_mut() {
            linker.link_hero(hero);
        }

        let names = NameIndex::new(&abilities.records, &heroes.records, &items.records);
        let composer = PatchComposer::new(&self.tokens, &names, language);
        let patch_notes = input.patches.iter().map(|p| composer.compose(p)).collect();

        let mut failures = abilities.failures;
        failures.extend(talents.failures);
        failures.extend(items.failures);
        failures.extend(heroes.failures);

        LanguageOutput {
            abilities: abilities.records,
            talents: talents.records,
            heroes: heroes.records,
            items: items.records,
            patch_notes,
            failures,
        }
    }
}

fn stamp<T: Entity + Clone>(out: &mut Vec<Localized<T>>, records: &[T], locale: &str) {
    out.extend(records.iter().map(|record| Localized::new(record, locale)));
}
