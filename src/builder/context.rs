//! Builder context and per-kind result batches

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::ids::IdentifierMap;
use crate::model::BuildFailure;
use crate::tokens::TokenStore;
use crate::values::NumberFormat;

/// Records built for one language plus the entities that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub records: Vec<T>,
    pub failures: Vec<BuildFailure>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Batch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a built record, or log and record the failure
    pub fn collect(&mut self, internal_name: &str, language: &str, result: Result<T>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(error) => {
                tracing::warn!(entity = internal_name, language, %error, "Dropping entity");
                self.failures.push(BuildFailure {
                    internal_name: internal_name.to_string(),
                    language: language.to_string(),
                    error,
                });
            }
        }
    }
}

/// Builds language-specific records from raw definition trees
///
/// Holds only shared read-only state, so one builder serves every language.
#[derive(Debug, Clone, Copy)]
pub struct EntityBuilder<'a> {
    pub(crate) tokens: &'a TokenStore,
    pub(crate) ids: &'a IdentifierMap,
    pub(crate) config: &'a PipelineConfig,
}

impl<'a> EntityBuilder<'a> {
    pub fn new(tokens: &'a TokenStore, ids: &'a IdentifierMap, config: &'a PipelineConfig) -> Self {
        Self { tokens, ids, config }
    }

    #[inline]
    pub fn number_format(&self, language: &str) -> NumberFormat {
        NumberFormat::for_language(self.config, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn test_batch_collects_failures() {
        let mut batch: Batch<u32> = Batch::new();
        batch.collect("a", "english", Ok(1));
        batch.collect(
            "b",
            "english",
            Err(ResolveError::MissingIdentifier("b".to_string())),
        );
        batch.collect("c", "english", Ok(3));

        assert_eq!(batch.records, vec![1, 3]);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].internal_name, "b");
    }

    #[test]
    fn test_number_format_follows_config() {
        let tokens = TokenStore::new("english");
        let ids = IdentifierMap::default();
        let config = PipelineConfig::default();
        let builder = EntityBuilder::new(&tokens, &ids, &config);
        assert_eq!(builder.number_format("english").decimal_separator, '.');
        assert_eq!(builder.number_format("russian").decimal_separator, ',');
    }
}
