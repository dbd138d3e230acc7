//! OCR text normalization.
//!
//! Turns raw OCR output into clean, line-oriented text: invisible marks,
//! Unicode composition, ruled-line debris, the ordered word-correction list,
//! digit-corruption repair and finally line-level cleanup. Front matter is cut
//! positionally before anything else so the remaining passes stay idempotent.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::boundary::joiner_tolerant;
use crate::config::{NormalizerConfig, UnicodeForm};

static YEAR_59_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b59([0-9]{3})\b").expect("regex"));
static YEAR_52_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b52([0-9]{3})\b").expect("regex"));
static YEAR_5_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b5([0-9]{3})\b").expect("regex"));
static YEAR_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(20[0-9]{2})[ \t]*\?+").expect("regex"));
static RULED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[=\-]{4,}|~{2,}").expect("regex"));
static HSPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("regex"));
static LINE_EDGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\n ?").expect("regex"));
static DIGITS_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("regex"));
static ROMAN_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\s*[ivxIVX]+\s*\)$").expect("regex"));
static SYMBOL_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\W_]+$").expect("regex"));
static PERCENT_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}\s*%$").expect("regex"));
static RUNNING_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(අනුපිටපත්|පිටුව|PAGE|Page|අංකය|Number)\b").expect("regex"));
static MASTHEAD_RE: Lazy<Regex> = Lazy::new(|| {
    joiner_tolerant(
        "(?i)ශ්\u{200D}රී ලංකා ප්\u{200D}රජාතාන්ත්\u{200D}රික සමාජවාදී ජනරජය(?:ේ)?|democratic socialist republic of sri lanka",
    )
});

const MAX_REWRITE_PASSES: usize = 4;

/// Compiled normalizer for one document kind.
#[derive(Debug, Clone)]
pub struct Normalizer {
    form: UnicodeForm,
    invisible: Vec<char>,
    rules: Vec<(String, String)>,
    front_matter_lines: usize,
    strip_percent_lines: bool,
    strip_running_headers: bool,
}

impl Normalizer {
    /// Build from config. Substitution rules are passed through the same
    /// Unicode form and invisible-mark deletion as the text, so a rule written
    /// with a joiner still matches text whose joiners were removed.
    pub fn new(cfg: &NormalizerConfig) -> Self {
        let mut n = Self {
            form: cfg.unicode_form,
            invisible: cfg.invisible_marks.clone(),
            rules: Vec::with_capacity(cfg.substitutions.len()),
            front_matter_lines: cfg.front_matter_lines,
            strip_percent_lines: cfg.strip_percent_lines,
            strip_running_headers: cfg.strip_running_headers,
        };
        for (pat, rep) in &cfg.substitutions {
            let pat = n.canonical_rule_text(pat);
            let rep = n.canonical_rule_text(rep);
            if pat.is_empty() || pat == rep {
                continue;
            }
            n.rules.push((pat, rep));
        }
        n
    }

    fn canonical_rule_text(&self, s: &str) -> String {
        self.delete_invisible(&compose(s, self.form))
    }

    /// Number of effective substitution rules after canonicalization.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Full normalization of a raw OCR document: drop the configured front
    /// matter, then [`Normalizer::clean`].
    pub fn normalize(&self, raw: &str) -> String {
        let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
        self.clean(drop_until_nth_newline(&unified, self.front_matter_lines))
    }

    /// Every text-level pass, without the positional front-matter cut.
    /// `clean(clean(x)) == clean(x)`.
    pub fn clean(&self, text: &str) -> String {
        // Marks go before composition so a mark between a base and its
        // combining sign cannot block composing them.
        let text = self.delete_invisible(&text.replace("\r\n", "\n").replace('\r', "\n"));
        let text = compose(&text, self.form);
        let text = RULED_RE.replace_all(&text, " ");
        let text = collapse_horizontal(&text);

        // Rules can feed each other across passes, and both rules and line
        // cleanup can expose new year tokens, so rewrite until stable.
        let mut current = self.rewrite(&text);
        for _ in 1..MAX_REWRITE_PASSES {
            let next = self.rewrite(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn rewrite(&self, text: &str) -> String {
        let text = compose(&self.apply_substitutions(text), self.form);
        let text = repair_year_digits(&text);
        if self.strip_running_headers {
            clean_lines(&strip_running_headers(&text), self.strip_percent_lines)
        } else {
            clean_lines(&text, self.strip_percent_lines)
        }
    }

    fn delete_invisible(&self, text: &str) -> String {
        text.chars().filter(|c| !self.invisible.contains(c)).collect()
    }

    /// Apply the rewrite list in order.
    pub fn apply_substitutions(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (pat, rep) in &self.rules {
            if out.contains(pat.as_str()) {
                out = replace_guarded(&out, pat, rep);
            }
        }
        out
    }
}

/// Convenience wrapper building a one-off [`Normalizer`].
pub fn normalize(raw: &str, cfg: &NormalizerConfig) -> String {
    Normalizer::new(cfg).normalize(raw)
}

fn compose(text: &str, form: UnicodeForm) -> String {
    match form {
        UnicodeForm::Nfc => text.nfc().collect(),
        UnicodeForm::Nfkc => text.nfkc().collect(),
    }
}

/// OCR misreads "20" as "59", "52" or "5" in year tokens. Only bounded-width
/// digit runs are touched.
pub fn repair_year_digits(text: &str) -> String {
    let t = YEAR_59_RE.replace_all(text, "20${1}");
    let t = YEAR_52_RE.replace_all(&t, "20${1}");
    let t = YEAR_5_RE.replace_all(&t, "2${1}");
    YEAR_PUNCT_RE.replace_all(&t, "${1}").into_owned()
}

fn collapse_horizontal(text: &str) -> String {
    let t = HSPACE_RE.replace_all(text, " ");
    LINE_EDGE_RE.replace_all(&t, "\n").into_owned()
}

/// Replace every occurrence of `pat` except where the text already reads as
/// `rep` at that position. Rules that extend a word (adding a virama, say)
/// therefore do not fire twice.
fn replace_guarded(text: &str, pat: &str, rep: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in text.match_indices(pat) {
        if text[idx..].starts_with(rep) {
            continue;
        }
        out.push_str(&text[last..idx]);
        out.push_str(rep);
        last = idx + pat.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Discard everything up to and including the `n`-th newline. Text with
/// fewer newlines is returned unchanged.
pub fn drop_until_nth_newline(text: &str, n: usize) -> &str {
    if n == 0 {
        return text;
    }
    match text.match_indices('\n').nth(n - 1) {
        Some((i, _)) => &text[i + 1..],
        None => text,
    }
}

/// Remove the republic masthead, lines opened by a running header or footer
/// keyword, and lines repeating an earlier line. Line order is kept.
pub fn strip_running_headers(text: &str) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for raw in text.lines() {
        let ln = MASTHEAD_RE.replace_all(raw, " ");
        let ln = ln.trim();
        if ln.is_empty() {
            out.push(String::new());
            continue;
        }
        if RUNNING_HEADER_RE.is_match(ln) || !seen.insert(ln.to_string()) {
            continue;
        }
        out.push(ln.to_string());
    }
    out.join("\n")
}

/// Line-level cleanup: trim, collapse debris inside the line, drop page
/// numbers, bare roman numerals and symbol-only lines, squeeze blank runs to a
/// single blank line and end with exactly one newline.
pub fn clean_lines(text: &str, strip_percent_lines: bool) -> String {
    let mut out: Vec<String> = Vec::new();
    for raw in text.lines() {
        let ln = collapse_horizontal(&RULED_RE.replace_all(raw, " "));
        let ln = ln.trim();
        if ln.is_empty() {
            if matches!(out.last(), Some(prev) if !prev.is_empty()) {
                out.push(String::new());
            }
            continue;
        }
        if DIGITS_LINE_RE.is_match(ln) || ROMAN_LINE_RE.is_match(ln) || SYMBOL_LINE_RE.is_match(ln) {
            continue;
        }
        if strip_percent_lines && PERCENT_LINE_RE.is_match(ln) {
            continue;
        }
        out.push(ln.to_string());
    }
    while matches!(out.last(), Some(l) if l.is_empty()) {
        out.pop();
    }
    let mut cleaned = out.join("\n");
    cleaned.push('\n');
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_replace_does_not_extend_twice() {
        assert_eq!(replace_guarded("abc abcd", "abc", "abcd"), "abcd abcd");
    }

    #[test]
    fn drop_nth_newline_keeps_short_text() {
        assert_eq!(drop_until_nth_newline("a\nb\nc", 4), "a\nb\nc");
        assert_eq!(drop_until_nth_newline("1\n2\n3\n4\nrest", 4), "rest");
    }
}
