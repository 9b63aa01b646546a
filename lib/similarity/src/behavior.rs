//! Behavioural distance over [`BehaviorFeatures`]

use serde::{Deserialize, Serialize};
use uisim_core::BehaviorFeatures;
use crate::distance::{capped_ratio, clamp_unit, jaccard_distance, Distance};

const EVENT_WEIGHT: f64 = 0.25;
const INTERACTION_WEIGHT: f64 = 0.20;
const STATE_WEIGHT: f64 = 0.15;
const API_WEIGHT: f64 = 0.20;
const COMPLEXITY_WEIGHT: f64 = 0.20;

/// Distance between two [`BehaviorFeatures`]
///
/// Jaccard distances over the label sets plus a normalised L1 difference
/// of the complexity counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BehaviorDistance {
    pub max_cyclomatic: u32,
    pub max_handlers: u32,
    pub max_api_calls: u32,
    pub max_conditionals: u32,
}

impl Default for BehaviorDistance {
    fn default() -> Self {
        Self {
            max_cyclomatic: 10,
            max_handlers: 10,
            max_api_calls: 10,
            max_conditionals: 10,
        }
    }
}

impl BehaviorDistance {
    /// Mean of the four clamped counter ratios
    pub fn complexity_distance(&self, a: &BehaviorFeatures, b: &BehaviorFeatures) -> f64 {
        let ratio = |x: u32, y: u32, cap: u32| capped_ratio(f64::from(x) - f64::from(y), f64::from(cap));

        let diffs = [
            ratio(a.cyclomatic, b.cyclomatic, self.max_cyclomatic),
            ratio(a.handler_count, b.handler_count, self.max_handlers),
            ratio(a.api_call_count, b.api_call_count, self.max_api_calls),
            ratio(a.conditional_count, b.conditional_count, self.max_conditionals),
        ];
        diffs.iter().sum::<f64>() / diffs.len() as f64
    }
}

impl Distance<BehaviorFeatures> for BehaviorDistance {
    fn distance(&self, a: &BehaviorFeatures, b: &BehaviorFeatures) -> f64 {
        let d_events = jaccard_distance(&a.event_types, &b.event_types);
        let d_interaction = jaccard_distance(&a.interaction_patterns, &b.interaction_patterns);
        let d_state = jaccard_distance(&a.state_patterns, &b.state_patterns);
        let d_api = jaccard_distance(&a.api_signatures, &b.api_signatures);
        let d_complex = self.complexity_distance(a, b);

        clamp_unit(
            EVENT_WEIGHT * d_events
                + INTERACTION_WEIGHT * d_interaction
                + STATE_WEIGHT * d_state
                + API_WEIGHT * d_api
                + COMPLEXITY_WEIGHT * d_complex,
        )
    }
}
