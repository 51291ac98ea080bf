// Mutation pipeline: option-driven expansion of the seed words
//
// Stage order is fixed: date expansion, then the enabled transformers in
// option order, then the enabled character sources. Every stage sees the
// working set as left by the previous one, so options compound (leet also
// rewrites the month names produced by date expansion).

use tracing::debug;

use passforge_core::{OptionSet, WorkingSet};

use crate::charset::CharSource;
use crate::date::expand_date;
use crate::transform::Transform;

/// Build the final working set for `words` under `options`.
///
/// Duplicate and empty seed words collapse. An empty word list gives an
/// empty working set whatever the options; character sources are only
/// injected next to at least one seed.
pub fn mutate<S: AsRef<str>>(words: &[S], options: OptionSet) -> WorkingSet {
    let mut set = WorkingSet::from_words(words.iter().map(|w| w.as_ref()));
    if set.is_empty() {
        debug!("no seed words, skipping mutation");
        return set;
    }
    debug!(seeds = set.len(), %options, "mutation started");

    let added = expand_dates(&mut set);
    debug!(added, size = set.len(), "date expansion");

    for option in options.transforms() {
        if let Some(transform) = Transform::from_option(option) {
            let added = apply_transform(&mut set, transform);
            debug!(%option, added, size = set.len(), "transform applied");
        }
    }

    for option in options.sources() {
        if let Some(source) = CharSource::from_option(option) {
            let added = set.merge(source.tokens());
            debug!(%option, added, size = set.len(), "characters injected");
        }
    }

    set
}

/// Merge the decomposition of every date token currently in `set`.
///
/// Returns the number of new tokens. Date tokens themselves stay in the set.
pub fn expand_dates(set: &mut WorkingSet) -> usize {
    let derived: Vec<String> = set
        .iter()
        .filter_map(|token| expand_date(token))
        .flatten()
        .collect();
    set.merge(derived)
}

/// Run one transformer over the current contents of `set` and merge the
/// output. Returns the number of new tokens.
pub fn apply_transform(set: &mut WorkingSet, transform: Transform) -> usize {
    let derived = transform.derive(set.as_slice());
    set.merge(derived)
}
