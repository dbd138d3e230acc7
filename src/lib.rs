//! Segmentation and weak labeling for OCR'd legal documents.
//!
//! Raw OCR text of statutes and gazette notices goes through
//! [`Normalizer`], is split into clause-level chunks by [`chunk`] using the
//! [`BoundaryClassifier`], labeled by [`label`] and screened by [`admit`].
//! [`Pipeline`] wires the stages together from a [`PipelineConfig`].

pub mod boundary;
pub mod chunker;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod filter;
pub mod labeler;
pub mod normalize;
pub mod pipeline;
pub mod substitutions;

pub use boundary::{starts_new_unit, BoundaryClassifier, BoundaryKind};
pub use chunker::{chunk, chunk_id, chunk_with, paragraph_blocks};
pub use config::{
    AdmissionRules, KindProfile, MetadataRule, NoisyRule, NormalizerConfig, PipelineConfig, TableLabelConfig,
    TableRule, UnicodeForm,
};
pub use document::{
    enumerate_documents, load_document, load_document_json, load_ocr_text, year_from_file_name, Document,
    DocumentKind,
};
pub use emit::{emit_corpus, manifest_path_for, sha256_hex, to_jsonl, EmitPaths, RunManifest};
pub use error::{ConfigError, EmitError, EnumerateError, Error, LoadError};
pub use filter::{admit, evaluate, Admission, FilterStats, RejectReason};
pub use labeler::{label, label_with, Label, LabelSet};
pub use normalize::{normalize, Normalizer};
pub use pipeline::{Chunk, CorpusOutput, CorpusSummary, DocumentOutput, Pipeline};
