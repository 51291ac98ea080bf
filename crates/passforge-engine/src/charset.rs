// Static punctuation token sources

use passforge_core::MutationOption;
use passforge_core::character::{ASCII_PUNCTUATION, SPECIAL_CHARS};

/// A fixed set of single-character tokens injected into the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharSource {
    /// `. $ ? ! *`
    Special,
    /// All 32 ASCII punctuation characters.
    AllPunctuation,
}

impl CharSource {
    /// The source behind a source option; `None` for transform options.
    pub fn from_option(option: MutationOption) -> Option<Self> {
        match option {
            MutationOption::Char => Some(CharSource::Special),
            MutationOption::AllChar => Some(CharSource::AllPunctuation),
            _ => None,
        }
    }

    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSource::Special => SPECIAL_CHARS,
            CharSource::AllPunctuation => ASCII_PUNCTUATION,
        }
    }

    /// The source's tokens, one per character, in table order.
    pub fn tokens(&self) -> impl Iterator<Item = String> {
        self.chars().iter().map(|c| c.to_string())
    }
}
