//! Permutation index for approximate nearest neighbour search
//!
//! Every indexed component is reduced to the ordering of the pivots by
//! increasing distance. Queries compare the first `k` pivots of two
//! orderings instead of recomputing the composite distance against every
//! indexed component:
//!
//! ```text
//! build:  N x P distance evaluations  -> one pivot ordering per component
//! query:  P distance evaluations      -> query ordering
//!         N prefix intersections (k)  -> ranked neighbours
//! ```

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;
use uisim_core::ComponentSignature;
use uisim_similarity::{ComponentDistance, Distance};
use crate::pivot::Pivot;

/// Pivot ids of one component, sorted by ascending distance to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationSignature {
    pub component_id: String,
    pub ordered_pivot_ids: Vec<String>,
}

impl PermutationSignature {
    /// The first `k` pivot ids (fewer if there are fewer pivots)
    #[inline]
    pub fn prefix(&self, k: usize) -> &[String] {
        &self.ordered_pivot_ids[..k.min(self.ordered_pivot_ids.len())]
    }
}

/// Fraction of pivot ids shared by the first `k` entries of both orderings
///
/// `k` is clamped to the shorter ordering; 0.0 when it ends up zero.
pub fn prefix_overlap(a: &PermutationSignature, b: &PermutationSignature, k: usize) -> f64 {
    let k = k.min(a.ordered_pivot_ids.len()).min(b.ordered_pivot_ids.len());
    let a_prefix: AHashSet<&str> = a.prefix(k).iter().map(String::as_str).collect();
    overlap(&a_prefix, b.prefix(k), k)
}

#[inline]
fn overlap(query_prefix: &AHashSet<&str>, candidate_prefix: &[String], k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let candidate: AHashSet<&str> = candidate_prefix.iter().map(String::as_str).collect();
    let shared = candidate.intersection(query_prefix).count();
    shared as f64 / k as f64
}

/// A ranked query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: String,
    /// Prefix overlap with the query, in [0.0, 1.0]
    pub score: f64,
}

/// Pivot-permutation index over component signatures
///
/// The permutation cache is filled by [`PermutationIndex::build`] and only
/// read afterwards. Entries keep dataset order, which is also the tie-break
/// order of query results.
pub struct PermutationIndex<D = ComponentDistance> {
    pivots: Vec<Pivot>,
    distance: D,
    entries: Vec<PermutationSignature>,
    positions: AHashMap<String, usize>,
}

impl<D: Distance<ComponentSignature>> PermutationIndex<D> {
    pub fn new(pivots: Vec<Pivot>, distance: D) -> Self {
        Self {
            pivots,
            distance,
            entries: Vec::new(),
            positions: AHashMap::new(),
        }
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    pub fn pivot_count(&self) -> usize {
        self.pivots.len()
    }

    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Number of indexed components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored permutation of an indexed component
    pub fn get(&self, id: &str) -> Option<&PermutationSignature> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    /// Indexed permutations, in dataset order
    pub fn entries(&self) -> &[PermutationSignature] {
        &self.entries
    }

    /// Order the pivots by ascending distance to `component`
    ///
    /// The sort is stable, so pivots at equal distance keep their position
    /// in the pivot list.
    pub fn compute_permutation(&self, component: &ComponentSignature) -> PermutationSignature {
        let mut distances: Vec<(usize, f64)> = self
            .pivots
            .iter()
            .enumerate()
            .map(|(idx, pivot)| (idx, self.distance.distance(component, pivot.signature())))
            .collect();

        distances.sort_by_key(|&(_, d)| OrderedFloat(d));

        PermutationSignature {
            component_id: component.id().to_string(),
            ordered_pivot_ids: distances
                .into_iter()
                .map(|(idx, _)| self.pivots[idx].id().to_string())
                .collect(),
        }
    }

    /// Compute and store the permutation of every component in `dataset`,
    /// replacing anything built before.
    ///
    /// Permutations are computed in parallel and frozen in dataset order.
    /// A repeated id overwrites the earlier entry in place.
    pub fn build(&mut self, dataset: &[ComponentSignature]) {
        let permutations: Vec<PermutationSignature> = dataset
            .par_iter()
            .map(|component| self.compute_permutation(component))
            .collect();

        let mut entries = Vec::with_capacity(permutations.len());
        let mut positions = AHashMap::with_capacity(permutations.len());
        for perm in permutations {
            match positions.get(&perm.component_id) {
                Some(&pos) => entries[pos] = perm,
                None => {
                    positions.insert(perm.component_id.clone(), entries.len());
                    entries.push(perm);
                }
            }
        }

        self.entries = entries;
        self.positions = positions;

        debug!(
            components = self.entries.len(),
            pivots = self.pivots.len(),
            "Built permutation index"
        );
    }

    /// Approximate neighbours of `query`
    ///
    /// `k` is clamped to the pivot count. Every indexed component is scored
    /// by the overlap of its first `k` pivots with the query's first `k`
    /// pivots; results are sorted by descending score (ties keep dataset
    /// order) and truncated to `top_n`.
    pub fn query_similar(&self, query: &ComponentSignature, k: usize, top_n: usize) -> Vec<Neighbor> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let effective_k = k.min(self.pivots.len());
        let query_perm = self.compute_permutation(query);
        let query_prefix: AHashSet<&str> = query_perm
            .prefix(effective_k)
            .iter()
            .map(String::as_str)
            .collect();

        let mut results: Vec<Neighbor> = self
            .entries
            .par_iter()
            .map(|perm| Neighbor {
                id: perm.component_id.clone(),
                score: overlap(&query_prefix, perm.prefix(effective_k), effective_k),
            })
            .collect();

        // Sort by score descending
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(top_n);

        debug!(
            query = query.id(),
            k = effective_k,
            returned = results.len(),
            "Permutation query"
        );
        results
    }
}
