//! # uisim
//!
//! Similarity search over UI components from React, Angular and Vue
//! repositories.
//!
//! Each component is summarised as a [`ComponentSignature`] with three
//! facets: DOM structure, CSS styling and behaviour. [`ComponentDistance`]
//! combines per-facet distances into one weighted score, and a
//! [`PermutationIndex`] answers approximate nearest neighbour queries by
//! comparing how components order a fixed set of pivots.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! uisim --corpus records.json --pivots 16 --k 8 --top-n 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use uisim::prelude::*;
//!
//! let dataset: Vec<ComponentSignature> = (0..6)
//!     .map(|i| ComponentSignature::empty(format!("c{}", i), UiFramework::Vue))
//!     .collect();
//!
//! let pivots = PivotSelector::seeded(&dataset, 3, 42).unwrap();
//! let mut index = PermutationIndex::new(pivots, ComponentDistance::default());
//! index.build(&dataset);
//!
//! let neighbors = index.query_similar(&dataset[0], 3, 2);
//! assert_eq!(neighbors.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! - [`uisim-core`](https://docs.rs/uisim-core) - Signatures, facets, errors
//! - [`uisim-similarity`](https://docs.rs/uisim-similarity) - Facet and composite distances
//! - [`uisim-index`](https://docs.rs/uisim-index) - Pivot selection and permutation index
//! - [`uisim-corpus`](https://docs.rs/uisim-corpus) - Records, corpora, train/query split
//! - [`uisim-extract`](https://docs.rs/uisim-extract) - Loader, extractor and scanner seams

pub mod pipeline;

// Re-export core types
pub use uisim_core::{
    BehaviorFeatures, ColorPoint, ComponentSignature, CssFeatures, DomFeatures, Error,
    FontSizeBucket, Result, UiFramework,
};

// Re-export similarity
pub use uisim_similarity::{
    BehaviorDistance, ComponentDistance, CompositeWeights, CssDistance, Distance,
    DistanceBreakdown, DistanceConfig, DomDistance,
};

// Re-export index
pub use uisim_index::{Neighbor, PermutationIndex, PermutationSignature, Pivot, PivotSelector};

// Re-export corpus
pub use uisim_corpus::{ComponentCorpus, ComponentKey, ComponentRecord, ComponentSourceRef, CorpusSplit, RepoId};

pub use pipeline::{PipelineConfig, PipelineReport, QueryResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComponentSignature, DomFeatures, CssFeatures, BehaviorFeatures, UiFramework,
        ComponentDistance, CompositeWeights, Distance,
        PermutationIndex, PivotSelector, Neighbor,
        ComponentCorpus, ComponentRecord, CorpusSplit,
        PipelineConfig,
        Error, Result,
    };
}

/// Extraction and scanning seams
pub mod extract {
    pub use uisim_extract::*;
}
