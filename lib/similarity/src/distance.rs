//! Distance primitives shared by the facet distances
//!
//! All functions return a distance in range [0.0, 1.0] where 0.0 means
//! identical and 1.0 means maximally dissimilar.

use uisim_core::{Histogram, LabelSet};

/// A normalised distance over values of type `T`
///
/// Implementations must return a value in [0.0, 1.0] and should clamp
/// anything outside that range. Closures `Fn(&T, &T) -> f64` implement the
/// trait too, which is handy for plugging in fixed test distances.
pub trait Distance<T: ?Sized>: Send + Sync {
    fn distance(&self, a: &T, b: &T) -> f64;
}

impl<T, F> Distance<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> f64 + Send + Sync,
{
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        self(a, b)
    }
}

/// Clamp into [0.0, 1.0]. NaN is treated as maximal distance.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        1.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// `|diff| / cap`, clamped into [0.0, 1.0]
///
/// A non-positive cap only distinguishes equal (0.0) from different (1.0).
#[inline]
pub fn capped_ratio(diff: f64, cap: f64) -> f64 {
    if cap > 0.0 {
        clamp_unit(diff.abs() / cap)
    } else if diff == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Cosine distance between two sparse histograms
///
/// Missing keys count as zero. Two histograms with zero norm (empty, or
/// only zero counts) are identical (0.0); if only one side has a zero norm
/// the distance is 1.0.
pub fn cosine_hist_distance(a: &Histogram, b: &Histogram) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    for (key, &va) in a {
        let va = f64::from(va);
        norm_a += va * va;
        if let Some(&vb) = b.get(key) {
            dot += va * f64::from(vb);
        }
    }
    let norm_b: f64 = b.values().map(|&vb| f64::from(vb) * f64::from(vb)).sum();

    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => return 0.0,
        (true, false) | (false, true) => return 1.0,
        (false, false) => {}
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    clamp_unit(1.0 - similarity)
}

/// Jaccard distance between two label sets
///
/// Two empty sets are identical (0.0).
pub fn jaccard_distance(a: &LabelSet, b: &LabelSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.iter().filter(|label| b.contains(*label)).count();
    let union = a.len() + b.len() - intersection;

    clamp_unit(1.0 - intersection as f64 / union as f64)
}
