//! Feature extractor seams
//!
//! Concrete text heuristics live outside this crate. The traits here are
//! what they plug into, and [`extract_records`] drives them over a batch of
//! source references.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uisim_core::{BehaviorFeatures, ComponentSignature, CssFeatures, DomFeatures, Result};
use uisim_corpus::{ComponentRecord, ComponentSourceRef};
use crate::source::{ComponentSource, SourceLoader};

pub trait DomFeatureExtractor: Send + Sync {
    fn extract_dom(&self, source: &ComponentSource) -> Result<DomFeatures>;
}

pub trait CssFeatureExtractor: Send + Sync {
    fn extract_css(&self, source: &ComponentSource) -> Result<CssFeatures>;
}

pub trait BehaviorFeatureExtractor: Send + Sync {
    fn extract_behavior(&self, source: &ComponentSource) -> Result<BehaviorFeatures>;
}

/// Builds a full signature from the three facet extractors
pub struct SignatureExtractor {
    dom: Box<dyn DomFeatureExtractor>,
    css: Box<dyn CssFeatureExtractor>,
    behavior: Box<dyn BehaviorFeatureExtractor>,
}

impl SignatureExtractor {
    pub fn new(
        dom: impl DomFeatureExtractor + 'static,
        css: impl CssFeatureExtractor + 'static,
        behavior: impl BehaviorFeatureExtractor + 'static,
    ) -> Self {
        Self {
            dom: Box::new(dom),
            css: Box::new(css),
            behavior: Box::new(behavior),
        }
    }

    /// Id and framework are taken from the source
    pub fn extract(&self, source: &ComponentSource) -> Result<ComponentSignature> {
        let dom = self.dom.extract_dom(source)?;
        let css = self.css.extract_css(source)?;
        let behavior = self.behavior.extract_behavior(source)?;
        Ok(ComponentSignature::new(
            source.id.clone(),
            source.framework,
            dom,
            css,
            behavior,
        ))
    }
}

/// A component left out of an extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub records: Vec<ComponentRecord>,
    pub failures: Vec<ExtractionFailure>,
}

/// Load and extract every reference, best effort
///
/// A component whose extractor fails is skipped and reported in
/// `failures`. A signature that does not match its reference aborts the run
/// with [`uisim_core::Error::IdentityMismatch`].
pub fn extract_records(
    refs: &[ComponentSourceRef],
    loader: &dyn SourceLoader,
    extractor: &SignatureExtractor,
) -> Result<ExtractionReport> {
    let mut report = ExtractionReport::default();

    for source_ref in refs {
        let source = loader.load(source_ref);
        let signature = match extractor.extract(&source) {
            Ok(signature) => signature,
            Err(e) => {
                let id = source_ref.id();
                warn!(component = %id, error = %e, "Skipping component");
                report.failures.push(ExtractionFailure {
                    id,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        report.records.push(ComponentRecord::new(source_ref.clone(), signature)?);
    }

    info!(
        extracted = report.records.len(),
        failed = report.failures.len(),
        "Extraction finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InlineSourceLoader;
    use uisim_core::{histogram, Error, UiFramework};
    use uisim_corpus::{ComponentKey, RepoId};

    struct TagCounter;

    impl DomFeatureExtractor for TagCounter {
        fn extract_dom(&self, source: &ComponentSource) -> Result<DomFeatures> {
            if source.template_code.contains("<broken") {
                return Err(Error::Extraction {
                    id: source.id.clone(),
                    reason: "unbalanced markup".to_string(),
                });
            }
            let divs = source.template_code.matches("<div").count() as u32;
            Ok(DomFeatures {
                tag_histogram: histogram([("div", divs)]),
                depth: divs,
                ..Default::default()
            })
        }
    }

    struct NoCss;

    impl CssFeatureExtractor for NoCss {
        fn extract_css(&self, _source: &ComponentSource) -> Result<CssFeatures> {
            Ok(CssFeatures::default())
        }
    }

    struct NoBehavior;

    impl BehaviorFeatureExtractor for NoBehavior {
        fn extract_behavior(&self, _source: &ComponentSource) -> Result<BehaviorFeatures> {
            Ok(BehaviorFeatures::default())
        }
    }

    struct RenamingLoader;

    impl SourceLoader for RenamingLoader {
        fn load(&self, source_ref: &ComponentSourceRef) -> ComponentSource {
            ComponentSource {
                id: format!("{}-renamed", source_ref.id()),
                framework: source_ref.framework,
                ..Default::default()
            }
        }
    }

    fn extractor() -> SignatureExtractor {
        SignatureExtractor::new(TagCounter, NoCss, NoBehavior)
    }

    fn inline_ref(name: &str, template: &str) -> ComponentSourceRef {
        let key = ComponentKey::new(
            RepoId::new("github.com", "acme", "ui"),
            format!("src/{}.tsx", name),
            name,
        );
        let mut source_ref = ComponentSourceRef::single_file(key, UiFramework::React, "/repos/ui");
        source_ref.inline_template_code = Some(template.to_string());
        source_ref
    }

    #[test]
    fn test_signature_takes_identity_from_source() {
        let source = ComponentSource {
            id: "a".to_string(),
            framework: UiFramework::Vue,
            template_code: "<div><div></div></div>".to_string(),
            ..Default::default()
        };
        let signature = extractor().extract(&source).unwrap();
        assert_eq!(signature.id(), "a");
        assert_eq!(signature.framework(), UiFramework::Vue);
        assert_eq!(signature.dom().depth, 2);
    }

    #[test]
    fn test_failing_component_is_excluded() {
        let refs = vec![
            inline_ref("Card", "<div></div>"),
            inline_ref("Broken", "<broken"),
            inline_ref("Panel", "<div><div></div></div>"),
        ];
        let report = extract_records(&refs, &InlineSourceLoader, &extractor()).unwrap();

        let ids: Vec<&str> = report.records.iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec!["github.com/acme/ui:src/Card.tsx#Card", "github.com/acme/ui:src/Panel.tsx#Panel"]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "github.com/acme/ui:src/Broken.tsx#Broken");
        assert!(report.failures[0].reason.contains("unbalanced markup"));
    }

    #[test]
    fn test_identity_mismatch_aborts() {
        let refs = vec![inline_ref("Card", "<div></div>")];
        let result = extract_records(&refs, &RenamingLoader, &extractor());
        assert!(matches!(result, Err(Error::IdentityMismatch { .. })));
    }
}
