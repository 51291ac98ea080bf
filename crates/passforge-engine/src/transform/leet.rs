// Leet substitution

use passforge_core::character::leet_char;

/// Replace every character that has a leet entry, case-insensitively.
///
/// Characters without an entry keep their original case.
pub fn to_leet(word: &str) -> String {
    word.chars().map(|c| leet_char(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table() {
        assert_eq!(to_leet("abeiolstzg"), "4831015726");
    }

    #[test]
    fn case_insensitive_keys() {
        assert_eq!(to_leet("LEET"), "1337");
        assert_eq!(to_leet("Sara"), "54r4");
    }

    #[test]
    fn preserves_other_case() {
        assert_eq!(to_leet("MaRK"), "M4RK");
        assert_eq!(to_leet("Chloe"), "Ch103");
    }

    #[test]
    fn idempotent() {
        for word in ["password", "Gabriel2024", "\u{00E9}t\u{00E9}", "xyz"] {
            let once = to_leet(word);
            assert_eq!(to_leet(&once), once);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(to_leet(""), "");
    }
}
