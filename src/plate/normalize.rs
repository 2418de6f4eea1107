//! OCR result normalizer
//!
//! Collapses an engine's per-line output into the single cleaned string
//! the parser consumes: drop low-confidence lines, order the survivors by
//! confidence, join, and squeeze whitespace.

use crate::ocr::OcrLine;

/// Normalize raw OCR lines into one parseable string.
///
/// Lines with confidence at or below `threshold` are discarded. Survivors
/// are sorted by descending confidence; the sort is stable, so lines with
/// equal confidence keep their original engine order. The joined text has
/// line breaks replaced by spaces, runs of whitespace collapsed, and ends
/// trimmed. No surviving lines yields the empty string.
pub fn normalize_lines(lines: &[OcrLine], threshold: f64) -> String {
    let mut kept: Vec<&OcrLine> = lines
        .iter()
        .filter(|line| line.confidence > threshold)
        .collect();

    kept.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let joined = kept
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
