// Date detection and decomposition
//
// A token that is a strict ISO 8601 calendar date (YYYY-MM-DD) expands into
// month names and numeric fragments people commonly embed in passwords.

use chrono::{Datelike, NaiveDate};

use passforge_core::calendar::translate_to_french;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of tokens produced by [`expand_date`] for a valid date.
pub const DATE_TOKEN_COUNT: usize = 8;

/// Parse `token` as a strict `YYYY-MM-DD` date.
///
/// Exactly four year digits, two month digits and two day digits are
/// required, and the day must exist in the calendar. "2024-3-5",
/// "03/05/2024" and "2023-02-29" are all rejected.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).ok()?;
    // Year 0000 is not a valid calendar year for this purpose.
    (date.year() >= 1).then_some(date)
}

/// Whether `token` is a strict `YYYY-MM-DD` date.
pub fn is_date(token: &str) -> bool {
    parse_date(token).is_some()
}

/// Expand a date token into its derived tokens, or `None` if it is not a date.
///
/// For "2024-03-05" the tokens are, in order:
/// `March`, `mars`, `03`, `05`, `2024`, `3`, `5`, `24`.
pub fn expand_date(token: &str) -> Option<Vec<String>> {
    parse_date(token).map(|date| decompose(&date))
}

fn decompose(date: &NaiveDate) -> Vec<String> {
    let mut out = Vec::with_capacity(DATE_TOKEN_COUNT);
    let english = date.format("%B").to_string();
    let french = translate_to_french(&english);
    out.push(english);
    if let Some(french) = french {
        out.push(french.to_string());
    }
    out.push(date.format("%m").to_string());
    out.push(date.format("%d").to_string());
    out.push(date.format("%Y").to_string());
    out.push(date.month().to_string());
    out.push(date.day().to_string());
    out.push(date.format("%y").to_string());
    out
}
