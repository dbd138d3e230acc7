//! Paragraph-block chunking under a character budget.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::boundary::BoundaryClassifier;
use crate::document::DocumentKind;

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("regex"));

/// Split normalized text into paragraph blocks: maximal runs of non-blank
/// lines, trimmed, in source order.
pub fn paragraph_blocks(text: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Greedy structural chunker.
///
/// Blocks are merged until adding the next one would exceed `max_chars`
/// (counted in characters) or the next block opens a new structural unit.
/// A boundary always flushes, even when the merged chunk would fit. A single
/// block longer than the budget is emitted whole.
pub fn chunk_with(text: &str, max_chars: usize, classifier: &BoundaryClassifier) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buff = String::new();
    let mut buff_len = 0usize;

    for p in paragraph_blocks(text) {
        let p_len = p.chars().count();
        let new_unit = classifier.starts_new_unit(p);
        if !buff.is_empty() && (buff_len + p_len > max_chars || new_unit) {
            chunks.push(std::mem::take(&mut buff));
            buff_len = 0;
        }
        if !buff.is_empty() {
            buff.push('\n');
            buff_len += 1;
        }
        buff.push_str(p);
        buff_len += p_len;
    }
    if !buff.is_empty() {
        chunks.push(buff);
    }
    chunks
}

pub fn chunk(normalized_text: &str, max_chars: usize, kind: DocumentKind) -> Vec<String> {
    chunk_with(normalized_text, max_chars, &BoundaryClassifier::for_kind(kind))
}

/// `<doc_id>::<index>` with the index zero-padded to four digits.
pub fn chunk_id(doc_id: &str, index: usize) -> String {
    format!("{}::{:04}", doc_id, index)
}
