//! Component records and corpora
//!
//! A [`ComponentRecord`] ties an extracted signature to the source it came
//! from. A [`ComponentCorpus`] is the set of records available for a run,
//! unique by component id.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use uisim_core::{ComponentSignature, Error, Result};
use crate::ids::RepoId;
use crate::source_ref::ComponentSourceRef;

/// Wire form of a [`ComponentRecord`], before the identity check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    pub source_ref: ComponentSourceRef,
    pub signature: ComponentSignature,
}

impl RecordEntry {
    pub fn into_record(self) -> Result<ComponentRecord> {
        ComponentRecord::new(self.source_ref, self.signature)
    }
}

/// A signature bound to its provenance
///
/// The signature id always equals the id of the source key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordEntry")]
pub struct ComponentRecord {
    source_ref: ComponentSourceRef,
    signature: ComponentSignature,
}

impl ComponentRecord {
    /// Fails with [`Error::IdentityMismatch`] when the signature id differs
    /// from the source key id. The mismatch points at an upstream bug and is
    /// never corrected here.
    pub fn new(source_ref: ComponentSourceRef, signature: ComponentSignature) -> Result<Self> {
        let key_id = source_ref.key.id();
        if key_id != signature.id() {
            return Err(Error::IdentityMismatch {
                signature_id: signature.id().to_string(),
                key_id,
            });
        }
        Ok(Self {
            source_ref,
            signature,
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        self.signature.id()
    }

    #[inline]
    pub fn source_ref(&self) -> &ComponentSourceRef {
        &self.source_ref
    }

    #[inline]
    pub fn signature(&self) -> &ComponentSignature {
        &self.signature
    }

    #[inline]
    pub fn repo_id(&self) -> &RepoId {
        &self.source_ref.key.repo_id
    }
}

impl TryFrom<RecordEntry> for ComponentRecord {
    type Error = Error;

    fn try_from(entry: RecordEntry) -> Result<Self> {
        entry.into_record()
    }
}

/// A collection of records, unique by id
#[derive(Debug, Clone, Default)]
pub struct ComponentCorpus {
    records: Vec<ComponentRecord>,
    by_id: AHashMap<String, usize>,
}

impl ComponentCorpus {
    /// Build a corpus, rejecting duplicate ids with [`Error::DuplicateId`]
    pub fn new(records: Vec<ComponentRecord>) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if by_id.insert(record.id().to_string(), pos).is_some() {
                return Err(Error::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records, by_id })
    }

    /// Subset of an existing corpus; ids are already known to be unique
    pub(crate) fn from_unique(records: Vec<ComponentRecord>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id().to_string(), pos))
            .collect();
        Self { records, by_id }
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ComponentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by component id
    pub fn by_id(&self, id: &str) -> Option<&ComponentRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    /// Id -> record index over the whole corpus
    pub fn by_id_map(&self) -> AHashMap<&str, &ComponentRecord> {
        self.records.iter().map(|r| (r.id(), r)).collect()
    }

    /// All signatures, in record order
    pub fn signatures(&self) -> Vec<ComponentSignature> {
        self.records.iter().map(|r| r.signature().clone()).collect()
    }

    /// Records that belong to `repo_id`, in record order
    pub fn for_repo(&self, repo_id: &RepoId) -> ComponentCorpus {
        let records = self
            .records
            .iter()
            .filter(|r| r.repo_id() == repo_id)
            .cloned()
            .collect();
        ComponentCorpus::from_unique(records)
    }

    /// Distinct repositories, in order of first appearance
    pub fn repositories(&self) -> Vec<&RepoId> {
        let mut seen = AHashSet::new();
        self.records
            .iter()
            .map(ComponentRecord::repo_id)
            .filter(|repo| seen.insert(*repo))
            .collect()
    }
}
