// Whole-token case conversion

/// Target casing for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// Every letter lowercase: "anna".
    AllLower,
    /// Every letter uppercase: "ANNA".
    AllUpper,
    /// First character uppercase, rest lowercase: "Anna".
    FirstUpper,
}

/// Return `word` converted to the given case.
///
/// Conversion uses the full Unicode mappings, so a character may expand
/// ("ß" upper-cases to "SS"). Non-letters pass through unchanged.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => capitalize(word),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    out.extend(first.to_uppercase());
    for c in chars {
        out.extend(c.to_lowercase());
    }
    out
}
