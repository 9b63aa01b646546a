//! # uisim Corpus
//!
//! Provenance and dataset handling for uisim.
//!
//! - [`RepoId`], [`ComponentKey`] - Stable component identity
//! - [`ComponentSourceRef`] - Where a component's files live
//! - [`ComponentRecord`] - A signature checked against its source key
//! - [`ComponentCorpus`] - Records unique by id
//! - [`CorpusSplit`] - Seeded train / query partition

pub mod corpus;
pub mod ids;
pub mod source_ref;
pub mod split;

pub use corpus::{ComponentCorpus, ComponentRecord, RecordEntry};
pub use ids::{ComponentKey, RepoId};
pub use source_ref::ComponentSourceRef;
pub use split::CorpusSplit;
