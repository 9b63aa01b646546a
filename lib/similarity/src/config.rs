//! Distance configuration
//!
//! Declarative description of the composite distance: facet weights and the
//! saturation caps of every facet. Every field is optional in JSON and falls
//! back to the defaults.

use serde::{Deserialize, Serialize};
use uisim_core::{Error, Result};
use crate::behavior::BehaviorDistance;
use crate::component::CompositeWeights;
use crate::css::CssDistance;
use crate::dom::DomDistance;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DistanceConfig {
    pub weights: CompositeWeights,
    pub dom: DomDistance,
    pub css: CssDistance,
    pub behavior: BehaviorDistance,
}

impl DistanceConfig {
    /// Check that every cap is a positive, finite number
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("dom.depth_cap", f64::from(self.dom.depth_cap)),
            ("dom.branch_cap", self.dom.branch_cap),
            ("css.max_spacing", self.css.max_spacing),
            ("css.max_color_dist", self.css.max_color_dist),
            ("behavior.max_cyclomatic", f64::from(self.behavior.max_cyclomatic)),
            ("behavior.max_handlers", f64::from(self.behavior.max_handlers)),
            ("behavior.max_api_calls", f64::from(self.behavior.max_api_calls)),
            ("behavior.max_conditionals", f64::from(self.behavior.max_conditionals)),
        ];

        for (name, cap) in caps {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, cap
                )));
            }
        }
        Ok(())
    }
}
