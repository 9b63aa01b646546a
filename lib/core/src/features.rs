//! Feature facets extracted from a UI component
//!
//! Three independent facets describe a component: the structure of its
//! markup ([`DomFeatures`]), its styling ([`CssFeatures`]) and its logic
//! ([`BehaviorFeatures`]). Extractors are expected to normalise values
//! before they reach the distance functions. Every facet deserializes with
//! missing fields defaulted, since upstream loaders may hand over
//! partially empty facets.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Sparse frequency histogram keyed by label
pub type Histogram = HashMap<String, u32>;

/// Unordered set of labels
pub type LabelSet = HashSet<String>;

/// Build a [`Histogram`] from `(label, count)` pairs
pub fn histogram<I, K>(entries: I) -> Histogram
where
    I: IntoIterator<Item = (K, u32)>,
    K: Into<String>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Build a [`LabelSet`] from labels
pub fn labels<I, K>(items: I) -> LabelSet
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Structural features of the template / markup layer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomFeatures {
    /// Element tag frequencies
    pub tag_histogram: Histogram,
    /// Detected layout patterns (e.g. `grid`, `list`, `form`)
    pub layout_patterns: LabelSet,
    /// Approximate tree depth
    pub depth: u32,
    /// Average number of children per element
    pub avg_branching: f64,
    /// Semantic role annotations (ARIA roles, landmarks)
    pub role_histogram: Histogram,
}

/// A colour in CIELAB space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorPoint {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl ColorPoint {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Lab space (CIE76 delta E)
    #[inline]
    pub fn euclidean(&self, other: &ColorPoint) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Discrete font-size categories used as keys of
/// [`CssFeatures::font_size_buckets`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeBucket {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl FontSizeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSizeBucket::Xs => "xs",
            FontSizeBucket::Sm => "sm",
            FontSizeBucket::Md => "md",
            FontSizeBucket::Lg => "lg",
            FontSizeBucket::Xl => "xl",
        }
    }
}

/// Styling features of a component
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CssFeatures {
    /// Normalised style tokens (e.g. `layout:flex`, `radius`)
    pub style_tokens: Histogram,
    /// Representative colours, in extraction order
    pub palette: Vec<ColorPoint>,
    pub spacing_mean: f64,
    pub spacing_std: f64,
    pub font_families: LabelSet,
    /// Font sizes grouped by [`FontSizeBucket`] key
    pub font_size_buckets: Histogram,
}

impl CssFeatures {
    /// Increment the count of a font-size bucket
    pub fn add_font_size(&mut self, bucket: FontSizeBucket) {
        *self
            .font_size_buckets
            .entry(bucket.as_str().to_string())
            .or_insert(0) += 1;
    }
}

/// Behavioural features of the component logic
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BehaviorFeatures {
    pub event_types: LabelSet,
    pub interaction_patterns: LabelSet,
    pub state_patterns: LabelSet,
    pub api_signatures: LabelSet,
    pub cyclomatic: u32,
    pub handler_count: u32,
    pub api_call_count: u32,
    pub conditional_count: u32,
}
