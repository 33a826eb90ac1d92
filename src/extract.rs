use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::PartNumber;

/// Six- or ten-digit runs bounded by non-word characters. A longer digit run
/// never yields a partial match because `\b` cannot sit between two digits.
static PART_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[0-9]{6}|[0-9]{10})\b").expect("part number pattern is valid")
});

/// Returns every part number found in `text`, in order of appearance.
///
/// Repeated part numbers are kept so that each occurrence is looked up on its
/// own. Text without any match yields an empty list.
pub fn extract_part_numbers(text: &str) -> Vec<PartNumber> {
    PART_NUMBER
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}
