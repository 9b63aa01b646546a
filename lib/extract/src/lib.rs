//! # uisim Extract
//!
//! Seams between raw repositories and [`ComponentRecord`](uisim_corpus::ComponentRecord)s.
//!
//! - [`SourceLoader`] - Reads component text for a source reference
//! - [`SignatureExtractor`] - Composes the DOM, CSS and behaviour extractors
//! - [`extract_records`] - Best-effort batch extraction
//! - [`RepoScanner`], [`FallbackScanner`], [`CompositeRepoScanner`] - Component discovery
//! - [`bridge`] - JSON contract for external scan engines

pub mod bridge;
pub mod extractors;
pub mod scan;
pub mod source;

pub use bridge::{decode_response, encode_request, ComponentDescriptor, ScanRequest, ScanResponse};
pub use extractors::{
    extract_records, BehaviorFeatureExtractor, CssFeatureExtractor, DomFeatureExtractor,
    ExtractionFailure, ExtractionReport, SignatureExtractor,
};
pub use scan::{
    CompositeRepoScanner, ExtractionMode, FallbackScanner, FrameworkRepoScanner, NoopEngine,
    RepoScanner, ScanEngine,
};
pub use source::{ComponentSource, InlineSourceLoader, SourceLoader};
