use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uisim_core::{Error, Result};
use crate::corpus::ComponentCorpus;

/// Disjoint train / query partition of a corpus
#[derive(Debug, Clone)]
pub struct CorpusSplit {
    pub train: ComponentCorpus,
    pub query: ComponentCorpus,
}

impl CorpusSplit {
    /// Shuffle the corpus with a `StdRng` seeded from `seed` and cut it at
    /// `floor(len * train_ratio)`
    pub fn random(corpus: &ComponentCorpus, train_ratio: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with_rng(corpus, train_ratio, &mut rng)
    }

    /// Same as [`CorpusSplit::random`] with a caller supplied random source
    pub fn random_with_rng<R: Rng + ?Sized>(
        corpus: &ComponentCorpus,
        train_ratio: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !train_ratio.is_finite() || !(0.0..=1.0).contains(&train_ratio) {
            return Err(Error::InvalidConfig(format!(
                "Train ratio must be within [0, 1], got {}",
                train_ratio
            )));
        }

        let mut shuffled = corpus.records().to_vec();
        shuffled.shuffle(rng);

        let train_size = ((shuffled.len() as f64) * train_ratio).floor() as usize;
        let query = shuffled.split_off(train_size.min(shuffled.len()));

        debug!(
            train = shuffled.len(),
            query = query.len(),
            train_ratio,
            "Split corpus"
        );

        Ok(Self {
            train: ComponentCorpus::from_unique(shuffled),
            query: ComponentCorpus::from_unique(query),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ComponentRecord;
    use crate::ids::{ComponentKey, RepoId};
    use crate::source_ref::ComponentSourceRef;
    use uisim_core::{ComponentSignature, UiFramework};

    fn corpus(n: usize) -> ComponentCorpus {
        let repo = RepoId::new("github.com", "acme", "ui");
        let records = (0..n)
            .map(|i| {
                let key = ComponentKey::new(repo.clone(), format!("src/C{}.tsx", i), format!("C{}", i));
                let source_ref = ComponentSourceRef::single_file(key, UiFramework::React, "/repos/ui");
                let signature = ComponentSignature::empty(source_ref.id(), UiFramework::React);
                ComponentRecord::new(source_ref, signature).unwrap()
            })
            .collect();
        ComponentCorpus::new(records).unwrap()
    }

    fn ids(corpus: &ComponentCorpus) -> Vec<String> {
        corpus.records().iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_split_sizes() {
        let split = CorpusSplit::random(&corpus(10), 0.8, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.query.len(), 2);
    }

    #[test]
    fn test_split_floors_train_size() {
        let split = CorpusSplit::random(&corpus(7), 0.5, 1).unwrap();
        assert_eq!(split.train.len(), 3);
        assert_eq!(split.query.len(), 4);
    }

    #[test]
    fn test_split_is_disjoint_and_complete() {
        let source = corpus(10);
        let split = CorpusSplit::random(&source, 0.6, 9).unwrap();
        for record in split.query.records() {
            assert!(split.train.by_id(record.id()).is_none());
        }
        let mut all = ids(&split.train);
        all.extend(ids(&split.query));
        all.sort();
        let mut expected = ids(&source);
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_split_extremes() {
        let source = corpus(5);
        let none = CorpusSplit::random(&source, 0.0, 42).unwrap();
        assert!(none.train.is_empty());
        assert_eq!(none.query.len(), 5);

        let all = CorpusSplit::random(&source, 1.0, 42).unwrap();
        assert_eq!(all.train.len(), 5);
        assert!(all.query.is_empty());
    }

    #[test]
    fn test_same_seed_same_order() {
        let source = corpus(20);
        let a = CorpusSplit::random(&source, 0.8, 42).unwrap();
        let b = CorpusSplit::random(&source, 0.8, 42).unwrap();
        assert_eq!(ids(&a.train), ids(&b.train));
        assert_eq!(ids(&a.query), ids(&b.query));
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let source = corpus(3);
        for ratio in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                CorpusSplit::random(&source, ratio, 42),
                Err(Error::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_empty_corpus() {
        let split = CorpusSplit::random(&ComponentCorpus::default(), 0.8, 42).unwrap();
        assert!(split.train.is_empty());
        assert!(split.query.is_empty());
    }
}
