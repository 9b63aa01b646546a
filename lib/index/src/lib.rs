//! # uisim Index
//!
//! Approximate nearest neighbour search over component signatures using a
//! pivot-based permutation index.
//!
//! - [`PivotSelector`] - Seeded random choice of landmark signatures
//! - [`PermutationIndex`] - Pivot orderings per component, queried by prefix overlap
//!
//! ## Example
//!
//! ```rust
//! use uisim_core::{ComponentSignature, UiFramework};
//! use uisim_index::{PermutationIndex, PivotSelector};
//! use uisim_similarity::ComponentDistance;
//!
//! let dataset: Vec<ComponentSignature> = (0..8)
//!     .map(|i| ComponentSignature::empty(format!("c{}", i), UiFramework::React))
//!     .collect();
//!
//! let pivots = PivotSelector::seeded(&dataset, 4, 42).unwrap();
//! let mut index = PermutationIndex::new(pivots, ComponentDistance::default());
//! index.build(&dataset);
//!
//! let neighbors = index.query_similar(&dataset[0], 2, 5);
//! assert_eq!(neighbors.len(), 5);
//! ```

pub mod pivot;
pub mod permutation;

pub use pivot::{Pivot, PivotSelector};
pub use permutation::{prefix_overlap, Neighbor, PermutationIndex, PermutationSignature};
