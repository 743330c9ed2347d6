//! Persistence-facing wrappers and deterministic record ids

use super::{Ability, Hero, Item, PatchNote, Talent};
use crate::error::ResolveError;
use serde::Serialize;

/// Deterministic 64-bit record id
///
/// First 8 bytes of `MD5("{entity_id}_{internal_name}_{locale}")`, little-endian.
/// Repeated runs produce the same id, so upserts overwrite instead of duplicating.
pub fn hash_id(entity_id: i64, internal_name: &str, locale: &str) -> u64 {
    let digest = md5::compute(format!("{}_{}_{}", entity_id, internal_name, locale));
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.0[..8]);
    u64::from_le_bytes(bytes)
}

/// Identity of a record for id hashing
pub trait Entity {
    fn entity_id(&self) -> i64;
    fn internal_name(&self) -> &str;
}

impl Entity for Ability {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn internal_name(&self) -> &str {
        &self.internal_name
    }
}

impl Entity for Talent {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn internal_name(&self) -> &str {
        &self.internal_name
    }
}

impl Entity for Hero {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn internal_name(&self) -> &str {
        &self.internal_name
    }
}

impl Entity for Item {
    fn entity_id(&self) -> i64 {
        self.id
    }
    fn internal_name(&self) -> &str {
        &self.internal_name
    }
}

impl Entity for PatchNote {
    fn entity_id(&self) -> i64 {
        self.timestamp
    }
    fn internal_name(&self) -> &str {
        &self.patch_number
    }
}

/// A record stamped for one presentation locale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Localized<T> {
    #[serde(rename = "_id")]
    pub id: u64,
    pub locale: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Entity + Clone> Localized<T> {
    pub fn new(record: &T, locale: &str) -> Self {
        Self {
            id: hash_id(record.entity_id(), record.internal_name(), locale),
            locale: locale.to_string(),
            record: record.clone(),
        }
    }
}

/// An entity dropped from the output, with the reason
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildFailure {
    pub internal_name: String,
    pub language: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: ResolveError,
}

fn serialize_error<S: serde::Serializer>(error: &ResolveError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
