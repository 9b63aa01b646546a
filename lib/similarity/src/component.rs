//! Composite distance over whole [`ComponentSignature`]s
//!
//! `alpha * dom + beta * css + gamma * behavior`, where the weights are
//! validated and normalised to sum to 1.0 so the result stays in [0, 1].

use serde::{Deserialize, Serialize};
use uisim_core::{ComponentSignature, Error, Result};
use crate::behavior::BehaviorDistance;
use crate::config::DistanceConfig;
use crate::css::CssDistance;
use crate::distance::{clamp_unit, Distance};
use crate::dom::DomDistance;

/// Raw facet weights as they appear in configuration files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeightsConfig {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            alpha: 0.4,
            beta: 0.3,
            gamma: 0.3,
        }
    }
}

/// Validated facet weights
///
/// Always non-negative and summing to 1.0. Deserializing goes through
/// [`CompositeWeights::new`], so an invalid config fails at parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "WeightsConfig", into = "WeightsConfig")]
pub struct CompositeWeights {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl CompositeWeights {
    /// Validate the weights
    /// - Checks that every weight is finite and non-negative
    /// - Normalizes weights to sum to 1.0 if they don't
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, weight) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !weight.is_finite() {
                return Err(Error::InvalidWeights(format!("{} is not finite", name)));
            }
            if weight < 0.0 {
                return Err(Error::InvalidWeights(format!("{} has negative weight {}", name, weight)));
            }
        }

        let weight_sum = alpha + beta + gamma;
        if weight_sum <= 0.0 {
            return Err(Error::InvalidWeights("total weight cannot be zero".to_string()));
        }

        if (weight_sum - 1.0).abs() > 0.001 {
            Ok(Self {
                alpha: alpha / weight_sum,
                beta: beta / weight_sum,
                gamma: gamma / weight_sum,
            })
        } else {
            Ok(Self { alpha, beta, gamma })
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            alpha: 0.4,
            beta: 0.3,
            gamma: 0.3,
        }
    }
}

impl TryFrom<WeightsConfig> for CompositeWeights {
    type Error = Error;

    fn try_from(raw: WeightsConfig) -> Result<Self> {
        CompositeWeights::new(raw.alpha, raw.beta, raw.gamma)
    }
}

impl From<CompositeWeights> for WeightsConfig {
    fn from(w: CompositeWeights) -> Self {
        WeightsConfig {
            alpha: w.alpha,
            beta: w.beta,
            gamma: w.gamma,
        }
    }
}

/// Per-facet distances combined into a composite
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DistanceBreakdown {
    pub dom: f64,
    pub css: f64,
    pub behavior: f64,
    /// Weighted composite of the three facets
    pub total: f64,
}

/// Weighted combination of the DOM, CSS and behaviour distances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentDistance {
    dom: DomDistance,
    css: CssDistance,
    behavior: BehaviorDistance,
    weights: CompositeWeights,
}

impl ComponentDistance {
    pub fn new(
        dom: DomDistance,
        css: CssDistance,
        behavior: BehaviorDistance,
        weights: CompositeWeights,
    ) -> Self {
        Self {
            dom,
            css,
            behavior,
            weights,
        }
    }

    /// Default facet distances with custom weights
    pub fn with_weights(weights: CompositeWeights) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    /// Build from a [`DistanceConfig`], validating its caps
    pub fn from_config(config: &DistanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.dom, config.css, config.behavior, config.weights))
    }

    pub fn weights(&self) -> &CompositeWeights {
        &self.weights
    }

    /// Compute every facet distance along with the composite
    pub fn breakdown(&self, a: &ComponentSignature, b: &ComponentSignature) -> DistanceBreakdown {
        let dom = self.dom.distance(a.dom(), b.dom());
        let css = self.css.distance(a.css(), b.css());
        let behavior = self.behavior.distance(a.behavior(), b.behavior());
        let total = clamp_unit(
            self.weights.alpha * dom + self.weights.beta * css + self.weights.gamma * behavior,
        );
        DistanceBreakdown {
            dom,
            css,
            behavior,
            total,
        }
    }
}

impl Distance<ComponentSignature> for ComponentDistance {
    fn distance(&self, a: &ComponentSignature, b: &ComponentSignature) -> f64 {
        self.breakdown(a, b).total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uisim_core::{histogram, labels, BehaviorFeatures, CssFeatures, DomFeatures, UiFramework};

    fn signature(id: &str, tag: &str, style: &str, event: &str, cyclomatic: u32) -> ComponentSignature {
        ComponentSignature::new(
            id,
            UiFramework::React,
            DomFeatures {
                tag_histogram: histogram([(tag, 1)]),
                depth: 1,
                avg_branching: 1.0,
                ..Default::default()
            },
            CssFeatures {
                style_tokens: histogram([(style, 1)]),
                ..Default::default()
            },
            BehaviorFeatures {
                event_types: labels([event]),
                cyclomatic,
                handler_count: 1,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_identical_signatures_zero_distance() {
        let distance = ComponentDistance::default();
        let a = signature("a", "div", "margin", "click", 1);
        let b = signature("b", "div", "margin", "click", 1);
        assert!(distance.distance(&a, &b).abs() < 1e-9);
        assert!(distance.distance(&a, &a).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_histograms_zero_self_distance() {
        let distance = ComponentDistance::default();
        let a = ComponentSignature::new(
            "a",
            UiFramework::React,
            DomFeatures {
                tag_histogram: histogram([("div", 0)]),
                depth: 1,
                ..Default::default()
            },
            CssFeatures {
                style_tokens: histogram([("margin", 0)]),
                ..Default::default()
            },
            BehaviorFeatures::default(),
        );
        assert!(distance.distance(&a, &a).abs() < 1e-9);
        let breakdown = distance.breakdown(&a, &a);
        assert!(breakdown.dom.abs() < 1e-9);
        assert!(breakdown.css.abs() < 1e-9);
    }

    #[test]
    fn test_composite_bounded() {
        let distance = ComponentDistance::default();
        let a = signature("a", "div", "margin", "click", 1);
        let c = signature("c", "ul", "radius", "submit", 4);
        let d = distance.distance(&a, &c);
        assert!(d > 0.0 && d <= 1.0, "got {}", d);
    }

    #[test]
    fn test_breakdown_total_matches_weighted_sum() {
        let distance = ComponentDistance::default();
        let a = signature("a", "div", "margin", "click", 1);
        let c = signature("c", "ul", "radius", "submit", 4);
        let b = distance.breakdown(&a, &c);
        let expected = 0.4 * b.dom + 0.3 * b.css + 0.3 * b.behavior;
        assert!((b.total - expected).abs() < 1e-12);
    }

    #[test]
    fn test_weights_normalization() {
        let w = CompositeWeights::new(2.0, 1.0, 1.0).unwrap();
        assert!((w.alpha() - 0.5).abs() < 1e-12);
        assert!((w.alpha() + w.beta() + w.gamma() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_reject_negative_and_zero() {
        assert!(matches!(
            CompositeWeights::new(-0.1, 0.6, 0.5),
            Err(Error::InvalidWeights(_))
        ));
        assert!(matches!(
            CompositeWeights::new(0.0, 0.0, 0.0),
            Err(Error::InvalidWeights(_))
        ));
        assert!(CompositeWeights::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_weights_affect_scoring() {
        // Same structure, different behaviour
        let a = signature("a", "div", "margin", "click", 1);
        let b = signature("b", "div", "margin", "submit", 1);

        let dom_only = ComponentDistance::with_weights(CompositeWeights::new(1.0, 0.0, 0.0).unwrap());
        let behavior_only = ComponentDistance::with_weights(CompositeWeights::new(0.0, 0.0, 1.0).unwrap());

        assert!(dom_only.distance(&a, &b).abs() < 1e-9);
        assert!(behavior_only.distance(&a, &b) > 0.0);
    }

    #[test]
    fn test_weights_deserialize_validates() {
        let w: CompositeWeights = serde_json::from_str(r#"{"alpha": 1, "beta": 1, "gamma": 2}"#).unwrap();
        assert!((w.gamma() - 0.5).abs() < 1e-12);

        let bad = serde_json::from_str::<CompositeWeights>(r#"{"alpha": -1}"#);
        assert!(bad.is_err());
    }
}
