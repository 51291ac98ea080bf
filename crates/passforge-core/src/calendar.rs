// Month-name tables for date expansion

/// English month names, January first.
pub const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// French month names (lowercase, as written in running text), January first.
pub const MONTHS_FR: [&str; 12] = [
    "janvier",
    "f\u{00E9}vrier",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "ao\u{00FB}t",
    "septembre",
    "octobre",
    "novembre",
    "d\u{00E9}cembre",
];

/// English name of a 1-based month number.
pub fn english_month(month: u32) -> Option<&'static str> {
    month_index(month).map(|i| MONTHS_EN[i])
}

/// French name of a 1-based month number.
pub fn french_month(month: u32) -> Option<&'static str> {
    month_index(month).map(|i| MONTHS_FR[i])
}

/// Translate an English month name to French. Matching is exact.
pub fn translate_to_french(english: &str) -> Option<&'static str> {
    MONTHS_EN
        .iter()
        .position(|&m| m == english)
        .map(|i| MONTHS_FR[i])
}

fn month_index(month: u32) -> Option<usize> {
    match month {
        1..=12 => Some(month as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup() {
        assert_eq!(english_month(1), Some("January"));
        assert_eq!(english_month(12), Some("December"));
        assert_eq!(french_month(3), Some("mars"));
        assert_eq!(french_month(8), Some("ao\u{00FB}t"));
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(english_month(0), None);
        assert_eq!(french_month(13), None);
    }

    #[test]
    fn translate() {
        assert_eq!(translate_to_french("February"), Some("f\u{00E9}vrier"));
        assert_eq!(translate_to_french("May"), Some("mai"));
        assert_eq!(translate_to_french("may"), None);
        assert_eq!(translate_to_french("Smarch"), None);
    }
}
