use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uisim_core::{ComponentSignature, Error, Result};

/// A reference component used as a fixed landmark when building
/// permutation signatures. The pivot id is always its signature id.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    id: String,
    signature: ComponentSignature,
}

impl Pivot {
    pub fn new(signature: ComponentSignature) -> Self {
        Self {
            id: signature.id().to_string(),
            signature,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn signature(&self) -> &ComponentSignature {
        &self.signature
    }
}

/// Picks pivots out of a dataset
pub struct PivotSelector;

impl PivotSelector {
    /// Select `count` distinct pivots uniformly at random, without
    /// replacement.
    ///
    /// The random source is supplied by the caller: the same dataset, count
    /// and RNG state always yield the same pivots in the same order.
    ///
    /// A dataset that repeats a signature id is rejected with
    /// `Error::DuplicateId`: two pivots sharing an id would shrink every
    /// permutation prefix below `k`.
    pub fn random_pivots<R: Rng + ?Sized>(
        dataset: &[ComponentSignature],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Pivot>> {
        if count > dataset.len() {
            return Err(Error::InsufficientDataset {
                requested: count,
                available: dataset.len(),
            });
        }

        let mut seen = AHashSet::with_capacity(dataset.len());
        for signature in dataset {
            if !seen.insert(signature.id()) {
                return Err(Error::DuplicateId(signature.id().to_string()));
            }
        }

        let mut order: Vec<usize> = (0..dataset.len()).collect();
        order.shuffle(rng);

        Ok(order
            .into_iter()
            .take(count)
            .map(|idx| Pivot::new(dataset[idx].clone()))
            .collect())
    }

    /// [`PivotSelector::random_pivots`] with a `StdRng` seeded from `seed`
    pub fn seeded(dataset: &[ComponentSignature], count: usize, seed: u64) -> Result<Vec<Pivot>> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_pivots(dataset, count, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uisim_core::UiFramework;

    fn dataset(n: usize) -> Vec<ComponentSignature> {
        (1..=n)
            .map(|i| ComponentSignature::empty(format!("id-{}", i), UiFramework::React))
            .collect()
    }

    fn ids(pivots: &[Pivot]) -> Vec<String> {
        pivots.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn test_returns_requested_count_deterministically() {
        let data = dataset(4);
        let a = PivotSelector::random_pivots(&data, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = PivotSelector::random_pivots(&data, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_seeded_matches_explicit_rng() {
        let data = dataset(10);
        let a = PivotSelector::seeded(&data, 5, 7).unwrap();
        let b = PivotSelector::random_pivots(&data, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_pivots_are_distinct_members() {
        let data = dataset(10);
        let pivots = PivotSelector::seeded(&data, 10, 3).unwrap();
        let mut seen = ids(&pivots);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 10);
        for pivot in &pivots {
            assert_eq!(pivot.id(), pivot.signature().id());
        }
    }

    #[test]
    fn test_count_exceeding_dataset_fails() {
        let data = dataset(3);
        let result = PivotSelector::seeded(&data, 4, 1);
        assert!(matches!(
            result,
            Err(Error::InsufficientDataset { requested: 4, available: 3 })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut data = dataset(3);
        data.push(ComponentSignature::empty("id-2", UiFramework::Vue));
        let result = PivotSelector::seeded(&data, 2, 1);
        assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "id-2"));
    }

    #[test]
    fn test_zero_pivots() {
        assert!(PivotSelector::seeded(&dataset(3), 0, 1).unwrap().is_empty());
        assert!(PivotSelector::seeded(&[], 0, 1).unwrap().is_empty());
    }
}
