use serde::{Deserialize, Serialize};
use crate::features::{BehaviorFeatures, CssFeatures, DomFeatures};
use crate::framework::UiFramework;

/// Unified representation of a UI component across its DOM, CSS and
/// behavioural facets.
///
/// The `id` is globally unique and, when produced by scanning, has the form
/// `{repository}:{relativePath}#{exportName}`. It is treated as an opaque
/// string here. A signature is never mutated after construction: fields are
/// private and only readable through accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentSignature {
    id: String,
    #[serde(default)]
    framework: UiFramework,
    #[serde(default)]
    dom: DomFeatures,
    #[serde(default)]
    css: CssFeatures,
    #[serde(default)]
    behavior: BehaviorFeatures,
}

impl ComponentSignature {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        framework: UiFramework,
        dom: DomFeatures,
        css: CssFeatures,
        behavior: BehaviorFeatures,
    ) -> Self {
        Self {
            id: id.into(),
            framework,
            dom,
            css,
            behavior,
        }
    }

    /// Signature with all facets empty
    #[must_use]
    pub fn empty(id: impl Into<String>, framework: UiFramework) -> Self {
        Self::new(
            id,
            framework,
            DomFeatures::default(),
            CssFeatures::default(),
            BehaviorFeatures::default(),
        )
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn framework(&self) -> UiFramework {
        self.framework
    }

    #[inline]
    pub fn dom(&self) -> &DomFeatures {
        &self.dom
    }

    #[inline]
    pub fn css(&self) -> &CssFeatures {
        &self.css
    }

    #[inline]
    pub fn behavior(&self) -> &BehaviorFeatures {
        &self.behavior
    }

    #[inline]
    #[must_use]
    pub fn with_dom(mut self, dom: DomFeatures) -> Self {
        self.dom = dom;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_css(mut self, css: CssFeatures) -> Self {
        self.css = css;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_behavior(mut self, behavior: BehaviorFeatures) -> Self {
        self.behavior = behavior;
        self
    }
}
