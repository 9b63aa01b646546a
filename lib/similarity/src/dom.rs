//! Structural distance over [`DomFeatures`]
//!
//! Weighted sum of tag histogram, layout pattern, shape (depth / branching)
//! and semantic role sub-distances.

use serde::{Deserialize, Serialize};
use uisim_core::DomFeatures;
use crate::distance::{capped_ratio, clamp_unit, cosine_hist_distance, jaccard_distance, Distance};

const TAG_WEIGHT: f64 = 0.45;
const LAYOUT_WEIGHT: f64 = 0.25;
const SHAPE_WEIGHT: f64 = 0.20;
const ROLE_WEIGHT: f64 = 0.10;

const DEPTH_SHARE: f64 = 0.7;
const BRANCH_SHARE: f64 = 0.3;

/// Distance between two [`DomFeatures`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomDistance {
    /// Depth difference at which the depth term saturates
    pub depth_cap: u32,
    /// Branching difference at which the branching term saturates
    pub branch_cap: f64,
}

impl Default for DomDistance {
    fn default() -> Self {
        Self {
            depth_cap: 10,
            branch_cap: 5.0,
        }
    }
}

impl DomDistance {
    pub fn new(depth_cap: u32, branch_cap: f64) -> Self {
        Self { depth_cap, branch_cap }
    }

    /// `0.7 * depth term + 0.3 * branching term`, each clamped first
    pub fn shape_distance(&self, a: &DomFeatures, b: &DomFeatures) -> f64 {
        let depth_diff = f64::from(a.depth) - f64::from(b.depth);
        let depth_norm = capped_ratio(depth_diff, f64::from(self.depth_cap));
        let branch_norm = capped_ratio(a.avg_branching - b.avg_branching, self.branch_cap);
        DEPTH_SHARE * depth_norm + BRANCH_SHARE * branch_norm
    }
}

impl Distance<DomFeatures> for DomDistance {
    fn distance(&self, a: &DomFeatures, b: &DomFeatures) -> f64 {
        let d_tags = cosine_hist_distance(&a.tag_histogram, &b.tag_histogram);
        let d_layout = jaccard_distance(&a.layout_patterns, &b.layout_patterns);
        let d_shape = self.shape_distance(a, b);
        let d_roles = cosine_hist_distance(&a.role_histogram, &b.role_histogram);

        clamp_unit(
            TAG_WEIGHT * d_tags
                + LAYOUT_WEIGHT * d_layout
                + SHAPE_WEIGHT * d_shape
                + ROLE_WEIGHT * d_roles,
        )
    }
}
