//! # uisim Core
//!
//! Core data model for the uisim component similarity engine.
//!
//! - [`ComponentSignature`] - A UI component described by three facets
//! - [`DomFeatures`], [`CssFeatures`], [`BehaviorFeatures`] - The facets
//! - [`UiFramework`] - Closed set of source frameworks
//! - [`Error`] - Error type shared by every uisim crate
//!
//! ## Example
//!
//! ```rust
//! use uisim_core::{ComponentSignature, DomFeatures, UiFramework, histogram};
//!
//! let signature = ComponentSignature::empty("github.com/acme/ui:src/Button.tsx#Button", UiFramework::React)
//!     .with_dom(DomFeatures {
//!         tag_histogram: histogram([("button", 1), ("span", 1)]),
//!         depth: 2,
//!         avg_branching: 1.0,
//!         ..Default::default()
//!     });
//! assert_eq!(signature.dom().depth, 2);
//! ```

pub mod error;
pub mod features;
pub mod framework;
pub mod signature;

pub use error::{Error, Result};
pub use features::{
    histogram, labels, BehaviorFeatures, ColorPoint, CssFeatures, DomFeatures, FontSizeBucket,
    Histogram, LabelSet,
};
pub use framework::UiFramework;
pub use signature::ComponentSignature;
