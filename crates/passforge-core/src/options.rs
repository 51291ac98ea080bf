// Mutation options: the fixed set of switches selecting transformers and
// auxiliary token sources, plus a compact copyable set of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned by strict option parsing ([`MutationOption::from_str`]).
///
/// The lenient entry points ([`OptionSet::from_names`]) never produce it;
/// unknown names are skipped there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mutation option: {0}")]
pub struct UnknownOption(pub String);

/// A single mutation switch.
///
/// The five transform options run a token transformer over the working set;
/// the two source options inject a static character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutationOption {
    /// Upper-case every token: "anna" -> "ANNA".
    Upper,
    /// Lower-case every token: "Anna" -> "anna".
    Lower,
    /// First character upper, rest lower: "aNNA" -> "Anna".
    Capitalize,
    /// ASCII transliteration: "Zoë" -> "Zoe".
    Accent,
    /// Leet substitution: "leet" -> "1337".
    Leet,
    /// Inject the curated special characters `. $ ? ! *`.
    Char,
    /// Inject the full ASCII punctuation set.
    AllChar,
}

impl MutationOption {
    /// Every option, in pipeline execution order.
    pub const ALL: [MutationOption; 7] = [
        MutationOption::Upper,
        MutationOption::Lower,
        MutationOption::Capitalize,
        MutationOption::Accent,
        MutationOption::Leet,
        MutationOption::Char,
        MutationOption::AllChar,
    ];

    /// The canonical option name as accepted on the command line and in JSON.
    pub const fn name(self) -> &'static str {
        match self {
            MutationOption::Upper => "upper",
            MutationOption::Lower => "lower",
            MutationOption::Capitalize => "capitalize",
            MutationOption::Accent => "accent",
            MutationOption::Leet => "leet",
            MutationOption::Char => "char",
            MutationOption::AllChar => "allChar",
        }
    }

    /// Look up an option by its canonical name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.name() == name)
    }

    /// Whether this option runs a token transformer.
    pub const fn is_transform(self) -> bool {
        matches!(
            self,
            MutationOption::Upper
                | MutationOption::Lower
                | MutationOption::Capitalize
                | MutationOption::Accent
                | MutationOption::Leet
        )
    }

    /// Whether this option injects a static token source.
    pub const fn is_source(self) -> bool {
        !self.is_transform()
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for MutationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MutationOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownOption(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// OptionSet
// ---------------------------------------------------------------------------

/// A set of enabled [`MutationOption`]s.
///
/// Inserting an option twice is a no-op, so a configuration that names the
/// same option repeatedly behaves exactly like one that names it once.
/// Iteration always follows [`MutationOption::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<MutationOption>", into = "Vec<MutationOption>")]
pub struct OptionSet {
    bits: u8,
}

impl OptionSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// A set with every option enabled.
    pub fn all() -> Self {
        MutationOption::ALL.into_iter().collect()
    }

    /// Build a set from option names, silently skipping unknown names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| MutationOption::from_name(name.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, option: MutationOption) {
        self.bits |= option.bit();
    }

    pub fn remove(&mut self, option: MutationOption) {
        self.bits &= !option.bit();
    }

    pub const fn contains(&self, option: MutationOption) -> bool {
        self.bits & option.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Builder-style insert.
    pub fn with(mut self, option: MutationOption) -> Self {
        self.insert(option);
        self
    }

    /// Enabled options in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = MutationOption> + '_ {
        MutationOption::ALL
            .into_iter()
            .filter(|opt| self.contains(*opt))
    }

    /// Enabled transform options in pipeline order.
    pub fn transforms(&self) -> impl Iterator<Item = MutationOption> + '_ {
        self.iter().filter(|opt| opt.is_transform())
    }

    /// Enabled source options in pipeline order.
    pub fn sources(&self) -> impl Iterator<Item = MutationOption> + '_ {
        self.iter().filter(|opt| opt.is_source())
    }
}

impl FromIterator<MutationOption> for OptionSet {
    fn from_iter<T: IntoIterator<Item = MutationOption>>(iter: T) -> Self {
        let mut set = OptionSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<MutationOption> for OptionSet {
    fn extend<T: IntoIterator<Item = MutationOption>>(&mut self, iter: T) {
        for option in iter {
            self.insert(option);
        }
    }
}

impl From<Vec<MutationOption>> for OptionSet {
    fn from(options: Vec<MutationOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<OptionSet> for Vec<MutationOption> {
    fn from(set: OptionSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for option in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(option.name())?;
            first = false;
        }
        Ok(())
    }
}
