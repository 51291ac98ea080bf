// WorkingSet: the deduplicated token pool fed to the candidate generator

use hashbrown::HashSet;

/// An insertion-ordered set of unique, non-empty tokens.
///
/// Tokens keep the position at which they were first merged, so a given
/// input and option set always produce the same iteration order. Merging a
/// token that is already present, or the empty string, is a no-op.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from seed words, collapsing duplicates.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.merge(words);
        set
    }

    /// Insert one token. Returns `true` if it was not present before.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.seen.contains(token.as_str()) {
            return false;
        }
        self.seen.insert(token.clone());
        self.tokens.push(token);
        true
    }

    /// Merge a batch of tokens (set union). Returns how many were new.
    pub fn merge<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for token in tokens {
            if self.insert(token) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in iteration order.
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl<S: Into<String>> FromIterator<S> for WorkingSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}

impl<S: Into<String>> Extend<S> for WorkingSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.merge(iter);
    }
}

impl<'a> IntoIterator for &'a WorkingSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl PartialEq for WorkingSet {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for WorkingSet {}
