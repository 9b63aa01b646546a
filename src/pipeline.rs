//! End-to-end evaluation run
//!
//! Load a corpus of records, split it, pick pivots from the train side,
//! index the train signatures and query the index with every held-out
//! record.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use uisim_core::{Error, Result};
use uisim_corpus::{ComponentCorpus, ComponentRecord, CorpusSplit, RecordEntry};
use uisim_index::{Neighbor, PermutationIndex, PivotSelector};
use uisim_similarity::{ComponentDistance, DistanceConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub distance: DistanceConfig,
    /// Share of the corpus used for indexing, in [0, 1]
    pub train_ratio: f64,
    pub seed: u64,
    pub pivot_count: usize,
    /// Permutation prefix length compared at query time
    pub k: usize,
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            distance: DistanceConfig::default(),
            train_ratio: 0.8,
            seed: 42,
            pivot_count: 16,
            k: 8,
            top_n: 5,
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config; missing fields take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.train_ratio.is_finite() || !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(Error::InvalidConfig(format!(
                "train_ratio must be within [0, 1], got {}",
                self.train_ratio
            )));
        }
        self.distance.validate()
    }
}

/// Neighbours found for one held-out record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query_id: String,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub train_size: usize,
    pub query_size: usize,
    pub pivot_ids: Vec<String>,
    pub results: Vec<QueryResult>,
}

/// Read a JSON array of `{source_ref, signature}` entries
///
/// Every entry goes through the identity check; a mismatch, a duplicate id
/// or a malformed file fails the whole load.
pub fn load_records(path: impl AsRef<Path>) -> Result<ComponentCorpus> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let entries: Vec<RecordEntry> = serde_json::from_str(&raw)?;

    let records = entries
        .into_iter()
        .map(RecordEntry::into_record)
        .collect::<Result<Vec<ComponentRecord>>>()?;

    let corpus = ComponentCorpus::new(records)?;
    info!(
        records = corpus.len(),
        repositories = corpus.repositories().len(),
        "Loaded corpus from {:?}",
        path
    );
    Ok(corpus)
}

pub fn run(corpus: &ComponentCorpus, config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;
    let distance = ComponentDistance::from_config(&config.distance)?;

    let split = CorpusSplit::random(corpus, config.train_ratio, config.seed)?;
    let train = split.train.signatures();
    info!(
        train = split.train.len(),
        query = split.query.len(),
        "Split corpus"
    );

    let pivot_count = config.pivot_count.min(train.len());
    if pivot_count < config.pivot_count {
        warn!(
            requested = config.pivot_count,
            available = train.len(),
            "Not enough train components, using fewer pivots"
        );
    }
    let pivots = PivotSelector::seeded(&train, pivot_count, config.seed)?;
    let pivot_ids = pivots.iter().map(|p| p.id().to_string()).collect();

    let mut index = PermutationIndex::new(pivots, distance);
    index.build(&train);
    info!(components = index.len(), pivots = index.pivot_count(), "Index built");

    let results: Vec<QueryResult> = split
        .query
        .records()
        .par_iter()
        .map(|record| QueryResult {
            query_id: record.id().to_string(),
            neighbors: index.query_similar(record.signature(), config.k, config.top_n),
        })
        .collect();

    info!(queries = results.len(), "Queries finished");

    Ok(PipelineReport {
        train_size: split.train.len(),
        query_size: split.query.len(),
        pivot_ids,
        results,
    })
}
