//! Per-document stage orchestration and parallel corpus runs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryClassifier;
use crate::chunker::{chunk_id, chunk_with};
use crate::config::{KindProfile, PipelineConfig};
use crate::document::{Document, DocumentKind};
use crate::filter::{evaluate, FilterStats};
use crate::labeler::{label_with, LabelSet};
use crate::normalize::Normalizer;

/// One admitted chunk, as written to the JSONL stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub doc_id: String,
    pub doc_type: DocumentKind,
    pub year: Option<i32>,
    pub language: String,
    pub chunk_id: String,
    pub text: String,
    pub labels: LabelSet,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentOutput {
    pub doc_id: String,
    /// Chunks produced by the chunker, before admission.
    pub produced: usize,
    pub chunks: Vec<Chunk>,
    pub stats: FilterStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub documents: usize,
    pub empty_documents: usize,
    pub skipped_year: Vec<String>,
    pub chunks_produced: usize,
    pub stats: FilterStats,
}

#[derive(Debug, Clone, Default)]
pub struct CorpusOutput {
    pub chunks: Vec<Chunk>,
    pub summary: CorpusSummary,
}

#[derive(Debug, Clone)]
struct KindStages {
    profile: KindProfile,
    normalizer: Normalizer,
    classifier: BoundaryClassifier,
}

impl KindStages {
    fn new(profile: &KindProfile) -> Self {
        Self {
            normalizer: Normalizer::new(&profile.normalizer),
            classifier: BoundaryClassifier::new(profile.notice_markers),
            profile: profile.clone(),
        }
    }
}

/// Normalize, chunk, label and filter documents. Holds no mutable state, so
/// one instance can serve many documents concurrently.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    acts: KindStages,
    gazettes: KindStages,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            acts: KindStages::new(&config.acts),
            gazettes: KindStages::new(&config.gazettes),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn stages(&self, kind: DocumentKind) -> &KindStages {
        match kind {
            DocumentKind::Act => &self.acts,
            DocumentKind::ExtraordinaryGazette => &self.gazettes,
        }
    }

    /// Year cutoff applied before a document enters the core. A document
    /// without a known year is excluded whenever a cutoff is configured.
    pub fn accepts_year(&self, year: Option<i32>) -> bool {
        match (self.config.min_year, year) {
            (None, _) => true,
            (Some(min), Some(y)) => y >= min,
            (Some(_), None) => false,
        }
    }

    pub fn normalize(&self, doc: &Document) -> String {
        self.stages(doc.document_type).normalizer.normalize(&doc.raw_text)
    }

    /// Run one document through the core. Empty or whitespace-only text
    /// yields no chunks.
    pub fn process_document(&self, doc: &Document) -> DocumentOutput {
        let mut out = DocumentOutput { doc_id: doc.document_id.clone(), ..Default::default() };
        if doc.raw_text.trim().is_empty() {
            tracing::debug!(doc_id = %doc.document_id, "empty document");
            return out;
        }

        let stages = self.stages(doc.document_type);
        let normalized = stages.normalizer.normalize(&doc.raw_text);
        let pieces = chunk_with(&normalized, stages.profile.max_chars, &stages.classifier);
        out.produced = pieces.len();

        for (i, text) in pieces.into_iter().enumerate() {
            let labels = label_with(&text, Some(&stages.profile.table_label));
            let admission = evaluate(&text, &stages.profile.admission);
            out.stats.record(admission);
            if !admission.is_admitted() {
                tracing::trace!(doc_id = %doc.document_id, index = i, ?admission, "chunk rejected");
                continue;
            }
            out.chunks.push(Chunk {
                doc_id: doc.document_id.clone(),
                doc_type: doc.document_type,
                year: doc.year,
                language: doc.language.clone(),
                chunk_id: chunk_id(&doc.document_id, i),
                text,
                labels,
            });
        }

        tracing::debug!(
            doc_id = %doc.document_id,
            normalized_chars = normalized.chars().count(),
            produced = out.produced,
            kept = out.stats.kept,
            dropped = out.stats.dropped(),
            "document processed"
        );
        out
    }

    /// Process documents in parallel, one task per document, and concatenate
    /// the results in input order.
    pub fn process_corpus(&self, docs: &[Document]) -> CorpusOutput {
        let (eligible, skipped): (Vec<&Document>, Vec<&Document>) =
            docs.iter().partition(|d| self.accepts_year(d.year));

        let outputs: Vec<DocumentOutput> = eligible.par_iter().map(|d| self.process_document(d)).collect();

        let mut summary = CorpusSummary {
            documents: eligible.len(),
            skipped_year: skipped.iter().map(|d| d.document_id.clone()).collect(),
            ..Default::default()
        };
        let mut chunks = Vec::new();
        for o in outputs {
            if o.produced == 0 {
                summary.empty_documents += 1;
            }
            summary.chunks_produced += o.produced;
            summary.stats.merge(&o.stats);
            chunks.extend(o.chunks);
        }
        tracing::info!(
            documents = summary.documents,
            skipped_year = summary.skipped_year.len(),
            kept = summary.stats.kept,
            dropped = summary.stats.dropped(),
            "corpus processed"
        );
        CorpusOutput { chunks, summary }
    }
}
