//! Style distance over [`CssFeatures`]

use serde::{Deserialize, Serialize};
use uisim_core::{ColorPoint, CssFeatures};
use crate::distance::{capped_ratio, clamp_unit, cosine_hist_distance, jaccard_distance, Distance};

const TOKEN_WEIGHT: f64 = 0.45;
const PALETTE_WEIGHT: f64 = 0.25;
const SPACING_WEIGHT: f64 = 0.15;
const FONT_FAMILY_WEIGHT: f64 = 0.10;
const FONT_SIZE_WEIGHT: f64 = 0.05;

const MEAN_SHARE: f64 = 0.7;
const STD_SHARE: f64 = 0.3;

/// Distance between two [`CssFeatures`]
///
/// Combines style tokens (cosine), palette, spacing statistics, font
/// families (Jaccard) and font-size buckets (cosine).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CssDistance {
    /// Spacing difference at which the spacing terms saturate
    pub max_spacing: f64,
    /// Lab distance at which the palette term saturates
    pub max_color_dist: f64,
}

impl Default for CssDistance {
    fn default() -> Self {
        Self {
            max_spacing: 20.0,
            max_color_dist: 100.0,
        }
    }
}

impl CssDistance {
    pub fn new(max_spacing: f64, max_color_dist: f64) -> Self {
        Self {
            max_spacing,
            max_color_dist,
        }
    }

    /// Average, over colours of `a`, of the distance to the nearest colour
    /// of `b`, normalised by `max_color_dist`.
    ///
    /// Directional: `palette_distance(a, b)` and `palette_distance(b, a)`
    /// can differ.
    pub fn palette_distance(&self, a: &[ColorPoint], b: &[ColorPoint]) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 0.0;
        }
        if a.is_empty() || b.is_empty() {
            return 1.0;
        }

        let total: f64 = a
            .iter()
            .map(|c| {
                b.iter()
                    .map(|d| c.euclidean(d))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum();
        let avg = total / a.len() as f64;

        capped_ratio(avg, self.max_color_dist)
    }

    /// `0.7 * mean term + 0.3 * std term`, each clamped first
    pub fn spacing_distance(&self, a: &CssFeatures, b: &CssFeatures) -> f64 {
        let mean_norm = capped_ratio(a.spacing_mean - b.spacing_mean, self.max_spacing);
        let std_norm = capped_ratio(a.spacing_std - b.spacing_std, self.max_spacing);
        MEAN_SHARE * mean_norm + STD_SHARE * std_norm
    }
}

impl Distance<CssFeatures> for CssDistance {
    fn distance(&self, a: &CssFeatures, b: &CssFeatures) -> f64 {
        let d_tokens = cosine_hist_distance(&a.style_tokens, &b.style_tokens);
        let d_palette = self.palette_distance(&a.palette, &b.palette);
        let d_spacing = self.spacing_distance(a, b);
        let d_fonts = jaccard_distance(&a.font_families, &b.font_families);
        let d_font_size = cosine_hist_distance(&a.font_size_buckets, &b.font_size_buckets);

        clamp_unit(
            TOKEN_WEIGHT * d_tokens
                + PALETTE_WEIGHT * d_palette
                + SPACING_WEIGHT * d_spacing
                + FONT_FAMILY_WEIGHT * d_fonts
                + FONT_SIZE_WEIGHT * d_font_size,
        )
    }
}
