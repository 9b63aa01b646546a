//! # uisim Similarity
//!
//! Multi-facet distance functions for UI component signatures.
//!
//! Every function here is pure and returns a normalised distance in
//! [0.0, 1.0] where 0.0 means identical.
//!
//! ## Features
//!
//! - **Primitives**: cosine distance over sparse histograms, Jaccard distance over label sets
//! - **Facet distances**: [`DomDistance`], [`CssDistance`], [`BehaviorDistance`]
//! - **Composite distance**: [`ComponentDistance`] with validated [`CompositeWeights`]
//! - **Explainability**: per-facet [`DistanceBreakdown`]
//!
//! ## Example
//!
//! ```rust
//! use uisim_core::{ComponentSignature, UiFramework};
//! use uisim_similarity::{ComponentDistance, CompositeWeights, Distance};
//!
//! let a = ComponentSignature::empty("a", UiFramework::React);
//! let b = ComponentSignature::empty("b", UiFramework::Vue);
//!
//! let distance = ComponentDistance::with_weights(CompositeWeights::new(0.5, 0.25, 0.25).unwrap());
//! assert_eq!(distance.distance(&a, &b), 0.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ DomDistance │   │ CssDistance │   │  Behavior   │
//! │ tags/layout │   │ tokens/color│   │ events/api  │
//! └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!        │ alpha           │ beta            │ gamma
//!        └────────────┬────┴─────────────────┘
//!              ┌──────┴──────┐
//!              │  Component  │
//!              │  Distance   │
//!              └─────────────┘
//! ```

pub mod distance;
pub mod dom;
pub mod css;
pub mod behavior;
pub mod component;
pub mod config;

// Re-export main types for convenience
pub use distance::{
    capped_ratio,
    clamp_unit,
    cosine_hist_distance,
    jaccard_distance,
    Distance,
};
pub use dom::DomDistance;
pub use css::CssDistance;
pub use behavior::BehaviorDistance;
pub use component::{ComponentDistance, CompositeWeights, DistanceBreakdown, WeightsConfig};
pub use config::DistanceConfig;
