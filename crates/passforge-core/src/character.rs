// Character tables: leet substitutions and the auxiliary punctuation sets

// ---------------------------------------------------------------------------
// Leet table
// ---------------------------------------------------------------------------

/// Leet substitutions, keyed by lowercase letter.
///
/// No value is itself a key, so applying the table twice gives the same
/// result as applying it once.
pub const LEET_TABLE: &[(char, char)] = &[
    ('a', '4'),
    ('b', '8'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('l', '1'),
    ('s', '5'),
    ('t', '7'),
    ('z', '2'),
    ('g', '6'),
];

/// Look up the leet replacement for a character, case-insensitively.
///
/// Returns `None` for characters without a table entry.
pub fn leet_char(c: char) -> Option<char> {
    let lower = simple_lower(c);
    LEET_TABLE
        .iter()
        .find(|&&(key, _)| key == lower)
        .map(|&(_, value)| value)
}

/// Convert a character to its simple lowercase equivalent.
///
/// Characters whose lowercase form is more than one character are returned
/// unchanged.
pub fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

// ---------------------------------------------------------------------------
// Punctuation sets
// ---------------------------------------------------------------------------

/// Curated punctuation most often appended to or embedded in passwords.
pub const SPECIAL_CHARS: &[char] = &['.', '$', '?', '!', '*'];

/// The 32 ASCII punctuation characters, in code point order.
pub const ASCII_PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];
