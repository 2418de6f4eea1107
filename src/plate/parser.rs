//! Plate text parser
//!
//! Reconstructs a structured plate record from noisy OCR text. Matching
//! runs in three tiers, first success wins:
//!
//! 1. Full pattern with a separated serial: `品川 500 あ 12-34`
//! 2. Full pattern with a compact 4-digit serial: `品川 500 あ 1234`
//! 3. Partial recovery: each segment hunted for independently, anywhere
//!    in the text, with missing segments left empty
//!
//! Parsing is pure: no I/O, no state beyond the compiled patterns and the
//! read-only region catalog, so one parser instance serves all requests.

use regex::Regex;

use super::catalog::RegionCatalog;
use super::record::PlateRecord;

/// Tiered plate-text parser
pub struct PlateParser {
    catalog: RegionCatalog,
    /// Tier 1: region, classification, hiragana, separated serial
    full_separated: Regex,
    /// Tier 2: same shape with a compact 4-digit serial
    full_compact: Regex,
    /// Tier 3 numeric sub-patterns, in priority order
    separated_serial: Regex,
    compact_serial: Regex,
    classification: Regex,
    /// Tier 3 hiragana probe
    hiragana: Regex,
}

impl PlateParser {
    /// Compile the tier patterns for the given separator set.
    ///
    /// `separators` lists every character accepted between the serial's
    /// two digit groups; Tier 1 captures whichever one the OCR produced,
    /// verbatim.
    pub fn new(catalog: RegionCatalog, separators: &[char]) -> Result<Self, regex::Error> {
        let sep_class: String = separators
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let sep = format!("[{}]", sep_class);

        Ok(Self {
            catalog,
            full_separated: Regex::new(&format!(
                r"([^\d\s]{{1,5}})\s*(\d{{3}})\s*([あ-ん])\s*(\d{{1,2}}{sep}\d{{2}})"
            ))?,
            full_compact: Regex::new(r"([^\d\s]{1,5})\s*(\d{3})\s*([あ-ん])\s*(\d{4})")?,
            separated_serial: Regex::new(&format!(r"\d{{1,2}}{sep}\d{{2}}"))?,
            compact_serial: Regex::new(r"\d{4}")?,
            classification: Regex::new(r"\d{3}")?,
            hiragana: Regex::new(r"[あ-ん]")?,
        })
    }

    /// Parse normalized OCR text into a plate record.
    ///
    /// Never fails: text that matches nothing yields a record whose
    /// segments are all empty, with `full_text` carrying the input.
    pub fn parse(&self, text: &str) -> PlateRecord {
        let mut record = PlateRecord::empty(text);

        if let Some(caps) = self.full_separated.captures(text) {
            record.region = caps[1].to_string();
            record.classification = caps[2].to_string();
            record.hiragana = caps[3].to_string();
            record.number = caps[4].to_string();
            return record;
        }

        if let Some(caps) = self.full_compact.captures(text) {
            record.region = caps[1].to_string();
            record.classification = caps[2].to_string();
            record.hiragana = caps[3].to_string();
            record.number = split_serial(&caps[4]);
            return record;
        }

        // Partial recovery: segments are independent; none is required to
        // sit next to any other.
        if let Some(region) = self.catalog.find_in(text) {
            record.region = region.to_string();
        }

        if let Some(m) = self.hiragana.find(text) {
            record.hiragana = m.as_str().to_string();
        }

        // Numeric sub-patterns are mutually exclusive: the first that
        // matches claims the digits and the others are not tried.
        if let Some(m) = self.separated_serial.find(text) {
            record.number = m.as_str().to_string();
        } else if let Some(m) = self.compact_serial.find(text) {
            record.number = split_serial(m.as_str());
        } else if let Some(m) = self.classification.find(text) {
            record.classification = m.as_str().to_string();
        }

        record
    }
}

/// Rewrite a compact 4-digit serial as two hyphenated groups.
/// Splits on characters, not bytes; OCR may hand back full-width digits.
fn split_serial(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let (head, tail) = chars.split_at(2);
    format!(
        "{}-{}",
        head.iter().collect::<String>(),
        tail.iter().collect::<String>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> PlateParser {
        PlateParser::new(RegionCatalog::default(), &['-', '\u{2212}', '\u{30FC}']).unwrap()
    }

    #[test]
    fn test_full_separated_match() {
        let record = parser().parse("品川 500 あ 12-34");

        assert_eq!(record.region, "品川");
        assert_eq!(record.classification, "500");
        assert_eq!(record.hiragana, "あ");
        assert_eq!(record.number, "12-34");
        assert_eq!(record.full_text, "品川 500 あ 12-34");
    }

    #[test]
    fn test_separator_variants_preserved_verbatim() {
        assert_eq!(parser().parse("品川 500 あ 12-34").number, "12-34");
        assert_eq!(parser().parse("品川 500 あ 12−34").number, "12−34");
        assert_eq!(parser().parse("品川 500 あ 12ー34").number, "12ー34");
    }

    #[test]
    fn test_compact_serial_synthesizes_hyphen() {
        let record = parser().parse("品川 500 あ 1234");

        assert_eq!(record.region, "品川");
        assert_eq!(record.number, "12-34");
    }

    #[test]
    fn test_single_digit_serial_group() {
        assert_eq!(parser().parse("品川 500 あ 1-23").number, "1-23");
    }

    #[test]
    fn test_region_absorbs_adjacent_noise() {
        // Non-digit, non-space characters touching the region run are
        // captured with it.
        let record = parser().parse("×品川 500 あ 12-34");
        assert_eq!(record.region, "×品川");
    }

    #[test]
    fn test_full_match_wins_over_partial_recovery() {
        // The catalog would resolve 品川 here, but the full pattern sits
        // later in the text and takes precedence.
        let record = parser().parse("品川 ノイズ大阪 500 あ 12-34");

        assert_eq!(record.region, "ノイズ大阪");
        assert_eq!(record.classification, "500");
        assert_eq!(record.number, "12-34");
    }

    #[test]
    fn test_partial_recovery() {
        let record = parser().parse("ノイズ 横浜 ノイズ あ 12-34");

        assert_eq!(record.region, "横浜");
        assert_eq!(record.classification, "");
        assert_eq!(record.hiragana, "あ");
        assert_eq!(record.number, "12-34");
    }

    #[test]
    fn test_partial_recovery_compact_serial() {
        let record = parser().parse("横浜 あ 1234");

        assert_eq!(record.region, "横浜");
        assert_eq!(record.hiragana, "あ");
        assert_eq!(record.number, "12-34");
        assert_eq!(record.classification, "");
    }

    #[test]
    fn test_classification_only_fallback() {
        let record = parser().parse("580");

        assert_eq!(record.classification, "580");
        assert_eq!(record.number, "");
        assert_eq!(record.region, "");
        assert_eq!(record.hiragana, "");
    }

    #[test]
    fn test_numeric_sub_patterns_are_exclusive() {
        // The serial claims its digits; the separate 3-digit run is lost.
        let record = parser().parse("12-34 567");
        assert_eq!(record.number, "12-34");
        assert_eq!(record.classification, "");

        let record = parser().parse("1234 567");
        assert_eq!(record.number, "12-34");
        assert_eq!(record.classification, "");
    }

    #[test]
    fn test_region_containment_unanchored() {
        let record = parser().parse("xx横浜xx");
        assert_eq!(record.region, "横浜");
    }

    #[test]
    fn test_empty_input() {
        let record = parser().parse("");
        assert_eq!(record, PlateRecord::empty(""));
    }

    #[test]
    fn test_no_segments_found() {
        let record = parser().parse("ABCDEF");
        assert_eq!(record, PlateRecord::empty("ABCDEF"));
    }

    #[test]
    fn test_idempotent() {
        let p = parser();
        let text = "品川 500 あ 12-34";
        assert_eq!(p.parse(text), p.parse(text));
    }

    #[test]
    fn test_full_width_digits_split_on_chars() {
        let record = parser().parse("１２３４");
        assert_eq!(record.number, "１２-３４");
    }

    #[test]
    fn test_custom_separator_set() {
        let p = PlateParser::new(RegionCatalog::default(), &['/']).unwrap();
        assert_eq!(p.parse("品川 500 あ 12/34").number, "12/34");
        // Hyphen is no longer a separator; digits fall through to the
        // compact sub-pattern probes instead.
        let record = p.parse("品川 500 あ 12-34");
        assert_eq!(record.number, "");
        assert_eq!(record.classification, "500");
    }
}
