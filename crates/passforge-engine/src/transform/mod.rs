// One-token transformers
//
// Each transformer maps a token to at most one derived token. The set is
// closed, so it is a plain enum rather than a trait object list.

pub mod accent;
pub mod leet;

use passforge_core::MutationOption;
use passforge_core::case::{CaseType, apply_case};

pub use accent::fold_to_ascii;
pub use leet::to_leet;

/// A token transformer selected by a transform [`MutationOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Upper,
    Lower,
    Capitalize,
    Accent,
    Leet,
}

impl Transform {
    /// Every transformer, in pipeline order.
    pub const ALL: [Transform; 5] = [
        Transform::Upper,
        Transform::Lower,
        Transform::Capitalize,
        Transform::Accent,
        Transform::Leet,
    ];

    /// The transformer behind a transform option; `None` for source options.
    pub fn from_option(option: MutationOption) -> Option<Self> {
        match option {
            MutationOption::Upper => Some(Transform::Upper),
            MutationOption::Lower => Some(Transform::Lower),
            MutationOption::Capitalize => Some(Transform::Capitalize),
            MutationOption::Accent => Some(Transform::Accent),
            MutationOption::Leet => Some(Transform::Leet),
            MutationOption::Char | MutationOption::AllChar => None,
        }
    }

    /// Transform a single token.
    ///
    /// Returns `None` when the transformation produces an empty string
    /// (accent folding of a token with no transliterable characters).
    pub fn apply(&self, token: &str) -> Option<String> {
        let out = match self {
            Transform::Upper => apply_case(token, CaseType::AllUpper),
            Transform::Lower => apply_case(token, CaseType::AllLower),
            Transform::Capitalize => apply_case(token, CaseType::FirstUpper),
            Transform::Accent => fold_to_ascii(token),
            Transform::Leet => to_leet(token),
        };
        if out.is_empty() { None } else { Some(out) }
    }

    /// Transform every token of `tokens`, in order. The input is not modified.
    pub fn derive<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| self.apply(t.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_mapping() {
        for (opt, tr) in MutationOption::ALL.into_iter().zip(Transform::ALL) {
            assert_eq!(Transform::from_option(opt), Some(tr));
        }
        assert_eq!(Transform::from_option(MutationOption::Char), None);
        assert_eq!(Transform::from_option(MutationOption::AllChar), None);
    }

    #[test]
    fn apply_each_variant() {
        assert_eq!(Transform::Upper.apply("anna").as_deref(), Some("ANNA"));
        assert_eq!(Transform::Lower.apply("ANNA").as_deref(), Some("anna"));
        assert_eq!(Transform::Capitalize.apply("aNNA").as_deref(), Some("Anna"));
        assert_eq!(Transform::Accent.apply("Zo\u{00EB}").as_deref(), Some("Zoe"));
        assert_eq!(Transform::Leet.apply("leet").as_deref(), Some("1337"));
    }

    #[test]
    fn apply_empty_result_is_none() {
        assert_eq!(Transform::Accent.apply("\u{E000}"), None); // private use
        assert_eq!(Transform::Upper.apply(""), None);
    }

    #[test]
    fn derive_preserves_order_and_input() {
        let tokens = vec!["bob".to_string(), "Alice".to_string()];
        let derived = Transform::Upper.derive(&tokens);
        assert_eq!(derived, vec!["BOB", "ALICE"]);
        assert_eq!(tokens, vec!["bob", "Alice"]);
    }

    #[test]
    fn reapply_is_safe() {
        for tr in Transform::ALL {
            let once = tr.apply("\u{00C9}lodie1990").unwrap();
            let twice = tr.apply(&once).unwrap();
            assert_eq!(once, twice, "{tr:?} should be stable on its own output");
        }
    }
}
