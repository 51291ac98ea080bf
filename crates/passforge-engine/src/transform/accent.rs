// Accent folding: ASCII transliteration

use deunicode::deunicode_with_tofu;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `word` to ASCII.
///
/// The word is decomposed (NFKD) and combining marks are dropped, so
/// precomposed and decomposed spellings agree. What remains is
/// transliterated by `deunicode`, which covers whole scripts (Cyrillic,
/// Greek, CJK, ...). Characters with no transliteration are removed.
/// ASCII input is returned unchanged.
pub fn fold_to_ascii(word: &str) -> String {
    if word.is_ascii() {
        return word.to_string();
    }
    let stripped: String = word.nfkd().filter(|&c| !is_combining_mark(c)).collect();
    deunicode_with_tofu(&stripped, "")
}
