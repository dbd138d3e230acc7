//! Chunk admission.
//!
//! Rules run in a fixed order and the first one that fires rejects the chunk.
//! Which rules are active for a document kind is configuration
//! ([`AdmissionRules`]), not a separate code path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::boundary::joiner_tolerant;
use crate::config::{AdmissionRules, MetadataRule, NoisyRule, TableRule};
use crate::document::DocumentKind;

/// Glyphs OCR emits for unreadable input.
pub const GARBAGE_GLYPHS: &[char] = &['\u{FFFD}', '\u{FFFC}', '\u{25A1}'];

static META_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        "(?i)(ගැසට්|අතිරේක|අති විශේෂ|extraordinary|gazette|පත්\u{200D}රයේ|මුද්\u{200D}රණය|මුද්\u{200D}රණ දෙපාර්තමේන්තුව|\
         government printer|printed|ප්\u{200D}රකාශයට පත්|පළ කරන ලදී|අංක\\s*\\d+/\\d+|No\\.\\s*\\d+/\\d+)",
    )
});
static HEADER_FOOTER_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        "(?i)(ශ්\u{200D}රී ලංකා ප්\u{200D}රජාතාන්ත්\u{200D}රික සමාජවාදී ජනරජය|democratic socialist republic|\
         gazz?ette of the democratic socialist republic|the gazette of sri lanka)",
    )
});
static PAGE_NO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d+|page\s*\d+)$").expect("regex"));
static NUMSYM_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\W_]+$").expect("regex"));
static SENTENCE_MARK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[။\.]\s").expect("regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    TooShort,
    TooNoisy,
    TableLike,
    PureMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected(RejectReason),
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Drop counters per rejection reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub kept: usize,
    pub too_short: usize,
    pub too_noisy: usize,
    pub table_like: usize,
    pub pure_metadata: usize,
}

impl FilterStats {
    pub fn record(&mut self, admission: Admission) {
        match admission {
            Admission::Admitted => self.kept += 1,
            Admission::Rejected(RejectReason::TooShort) => self.too_short += 1,
            Admission::Rejected(RejectReason::TooNoisy) => self.too_noisy += 1,
            Admission::Rejected(RejectReason::TableLike) => self.table_like += 1,
            Admission::Rejected(RejectReason::PureMetadata) => self.pure_metadata += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.too_short + self.too_noisy + self.table_like + self.pure_metadata
    }

    pub fn merge(&mut self, other: &FilterStats) {
        self.kept += other.kept;
        self.too_short += other.too_short;
        self.too_noisy += other.too_noisy;
        self.table_like += other.table_like;
        self.pure_metadata += other.pure_metadata;
    }
}

/// Evaluate the admission rules against a chunk.
pub fn evaluate(raw_chunk_text: &str, rules: &AdmissionRules) -> Admission {
    let text = raw_chunk_text.trim();
    let len = text.chars().count();

    if len < rules.min_chars {
        return Admission::Rejected(RejectReason::TooShort);
    }
    if let Some(noisy) = &rules.noisy {
        if is_too_noisy(text, noisy) {
            return Admission::Rejected(RejectReason::TooNoisy);
        }
    }
    if is_table_like(text, &rules.table) {
        return Admission::Rejected(RejectReason::TableLike);
    }
    if let Some(meta) = &rules.metadata {
        if looks_like_pure_metadata(text, meta) {
            return Admission::Rejected(RejectReason::PureMetadata);
        }
    }
    Admission::Admitted
}

/// Admission with the built-in rule set for `kind`.
pub fn admit(raw_chunk_text: &str, kind: DocumentKind) -> bool {
    evaluate(raw_chunk_text, &AdmissionRules::for_kind(kind)).is_admitted()
}

/// Many garbage glyphs in a short span: unrecoverable.
pub fn is_too_noisy(text: &str, rule: &NoisyRule) -> bool {
    let bad = text.chars().filter(|c| GARBAGE_GLYPHS.contains(c)).count();
    bad >= rule.min_glyphs && text.chars().count() < rule.max_len
}

/// Coarse table test: too many numeric/symbol-only lines, or (when enabled)
/// too many very short or page-number lines.
pub fn is_table_like(text: &str, rule: &TableRule) -> bool {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.len() < rule.min_lines.max(1) {
        return false;
    }
    let total = lines.len() as f64;
    let numericish = lines.iter().filter(|l| NUMSYM_LINE_RE.is_match(l)).count() as f64;
    if numericish / total >= rule.numeric_ratio {
        return true;
    }
    match rule.short_ratio {
        Some(ratio) => {
            let very_short = lines
                .iter()
                .filter(|l| l.chars().count() <= 3 || PAGE_NO_RE.is_match(l))
                .count() as f64;
            very_short / total >= ratio
        }
        None => false,
    }
}

/// Publication and letterhead boilerplate without real sentence structure.
pub fn looks_like_pure_metadata(text: &str, rule: &MetadataRule) -> bool {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    let t = collapsed.trim();
    if t.is_empty() {
        return true;
    }
    let len = t.chars().count();
    if len < rule.short_len && META_RE.is_match(t) {
        return true;
    }
    let hits = META_RE.find_iter(t).count() + HEADER_FOOTER_RE.find_iter(t).count();
    let terminators = SENTENCE_MARK_RE.find_iter(t).count();
    hits >= rule.min_hits && terminators <= rule.max_terminators && len < rule.max_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_each_reason() {
        let mut stats = FilterStats::default();
        stats.record(Admission::Admitted);
        stats.record(Admission::Rejected(RejectReason::TooShort));
        stats.record(Admission::Rejected(RejectReason::TooShort));
        stats.record(Admission::Rejected(RejectReason::PureMetadata));
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.too_short, 2);
        assert_eq!(stats.dropped(), 3);
    }

    #[test]
    fn noisy_needs_short_span() {
        let rule = NoisyRule { min_glyphs: 3, max_len: 400 };
        let short = format!("abc \u{FFFD}\u{FFFD}\u{FFFD} def");
        assert!(is_too_noisy(&short, &rule));
        let long = format!("{}\u{FFFD}\u{FFFD}\u{FFFD}", "x".repeat(500));
        assert!(!is_too_noisy(&long, &rule));
    }
}
