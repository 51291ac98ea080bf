// Engine: one-call entry point wiring the mutation pipeline to the generator
//
// The engine stores the option set and generator configuration, runs the
// pipeline on each call and either materializes the candidate list (subject
// to the configured limit) or hands back a prepared run for streaming.

use tracing::{debug, warn};

use passforge_core::{MutationOption, OptionSet, WorkingSet};

use crate::config::GeneratorConfig;
use crate::generator::{Candidates, candidate_count};
use crate::pipeline::mutate;

/// Error type for candidate generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The growth cap must be at least 1.
    #[error("invalid growth cap {0}: must be at least 1")]
    InvalidCap(usize),

    /// The run would produce more candidates than the configured limit.
    #[error("generation aborted: {required} candidates required, limit is {limit}")]
    LimitExceeded { required: u128, limit: u64 },

    /// The run fits the configured limit but the candidate list cannot be
    /// held in memory on this platform.
    #[error("generation aborted: {required} candidates cannot be held in memory")]
    TooLarge { required: u128 },

    /// The candidate count does not fit in 128 bits.
    #[error("candidate count overflows for {tokens} tokens with cap {cap}")]
    CountOverflow { tokens: usize, cap: usize },
}

/// Password candidate engine.
///
/// ```
/// use passforge_core::{MutationOption, OptionSet};
/// use passforge_engine::Engine;
///
/// let engine = Engine::new().with_options(OptionSet::new().with(MutationOption::Upper));
/// let out = engine.generate(&["jo"]).unwrap();
/// assert_eq!(out, vec!["jo", "JO"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: OptionSet,
    config: GeneratorConfig,
}

impl Engine {
    /// An engine with no options and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    /// Set options from names. Unknown names are skipped.
    pub fn with_option_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = OptionSet::new();
        for name in names {
            let name = name.as_ref();
            match MutationOption::from_name(name) {
                Some(option) => options.insert(option),
                None => debug!(option = name, "ignoring unknown mutation option"),
            }
        }
        self.options = options;
        self
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the mutation pipeline only.
    pub fn working_set<S: AsRef<str>>(&self, words: &[S]) -> WorkingSet {
        mutate(words, self.options)
    }

    /// Exact number of candidates `generate` would return for `words`.
    ///
    /// Ignores the candidate limit.
    pub fn count<S: AsRef<str>>(&self, words: &[S]) -> Result<u128, GenerateError> {
        self.config.validate()?;
        let n = self.working_set(words).len();
        candidate_count(n, self.config.cap)
            .ok_or(GenerateError::CountOverflow { tokens: n, cap: self.config.cap })
    }

    /// Generate the full candidate list.
    ///
    /// The exact count is computed before anything is allocated; if it
    /// exceeds the configured limit the call fails with
    /// [`GenerateError::LimitExceeded`]. Without a limit, a count the
    /// platform cannot allocate fails with [`GenerateError::TooLarge`].
    pub fn generate<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>, GenerateError> {
        let run = self.prepare(words)?;
        let required = match self.config.check(run.tokens().len()) {
            Ok(required) => required,
            Err(err) => {
                warn!(
                    tokens = run.tokens().len(),
                    cap = self.config.cap,
                    %err,
                    "generation rejected"
                );
                return Err(err);
            }
        };
        debug!(tokens = run.tokens().len(), %required, "generating candidates");
        let mut out = Vec::new();
        usize::try_from(required)
            .ok()
            .and_then(|n| out.try_reserve_exact(n).ok())
            .ok_or_else(|| {
                warn!(%required, "candidate list cannot be allocated");
                GenerateError::TooLarge { required }
            })?;
        out.extend(run.candidates());
        Ok(out)
    }

    /// Run the mutation pipeline and return a handle for lazy enumeration.
    ///
    /// The candidate limit is not applied; callers stream and stop when
    /// they choose.
    pub fn prepare<S: AsRef<str>>(&self, words: &[S]) -> Result<PreparedRun, GenerateError> {
        self.config.validate()?;
        Ok(PreparedRun {
            set: self.working_set(words),
            cap: self.config.cap,
        })
    }
}

/// A finished working set paired with the growth cap, ready to enumerate.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    set: WorkingSet,
    cap: usize,
}

impl PreparedRun {
    pub fn tokens(&self) -> &[String] {
        self.set.as_slice()
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.set
    }

    /// Exact candidate count (`None` on overflow).
    pub fn count(&self) -> Option<u128> {
        candidate_count(self.set.len(), self.cap)
    }

    /// A fresh lazy candidate sequence.
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self.set.as_slice(), self.cap)
    }
}

/// Generate candidates for `words` under `options` with the default
/// configuration.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    options: OptionSet,
) -> Result<Vec<String>, GenerateError> {
    Engine::new().with_options(options).generate(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_words_empty_output() {
        let words: [&str; 0] = [];
        assert!(generate(&words, OptionSet::all()).unwrap().is_empty());
    }

    #[test]
    fn single_word_no_options() {
        assert_eq!(generate(&["anna"], OptionSet::new()).unwrap(), vec!["anna"]);
    }

    #[test]
    fn option_names_lenient() {
        let engine = Engine::new().with_option_names(["capitalize", "nope"]);
        assert_eq!(engine.options(), OptionSet::new().with(MutationOption::Capitalize));
    }

    #[test]
    fn limit_exceeded_is_recoverable() {
        let engine = Engine::new()
            .with_config(GeneratorConfig::default().with_max_candidates(Some(5)));
        let err = engine.generate(&["a", "b", "c"]).unwrap_err();
        assert_eq!(err, GenerateError::LimitExceeded { required: 9, limit: 5 });
        assert_eq!(
            err.to_string(),
            "generation aborted: 9 candidates required, limit is 5"
        );
        // The same engine still serves smaller requests.
        assert_eq!(engine.generate(&["a"]).unwrap(), vec!["a"]);
    }

    #[test]
    fn unlimited_oversized_run_is_an_error() {
        let words: Vec<String> = (0..100_000).map(|i| format!("w{i}")).collect();
        let engine = Engine::new().with_config(GeneratorConfig::default().with_cap(6).unlimited());
        let required = engine.count(&words).unwrap();
        assert!(required > u128::from(u64::MAX));
        assert_eq!(
            engine.generate(&words),
            Err(GenerateError::TooLarge { required })
        );
    }

    #[test]
    fn invalid_cap_rejected_everywhere() {
        let engine = Engine::new().with_config(GeneratorConfig::default().with_cap(0));
        assert_eq!(engine.generate(&["a"]), Err(GenerateError::InvalidCap(0)));
        assert_eq!(engine.count(&["a"]), Err(GenerateError::InvalidCap(0)));
        assert!(engine.prepare(&["a"]).is_err());
    }

    #[test]
    fn count_ignores_limit() {
        let engine = Engine::new()
            .with_config(GeneratorConfig::default().with_max_candidates(Some(1)));
        assert_eq!(engine.count(&["a", "b", "c"]), Ok(9));
    }

    #[test]
    fn prepared_run_streams_same_sequence() {
        let engine = Engine::new().with_option_names(["upper"]);
        let words = ["ab", "cd"];
        let eager = engine.generate(&words).unwrap();
        let run = engine.prepare(&words).unwrap();
        assert_eq!(run.tokens(), &["ab", "cd", "AB", "CD"]);
        assert_eq!(run.count(), Some(eager.len() as u128));
        let lazy: Vec<String> = run.candidates().collect();
        assert_eq!(lazy, eager);
    }
}
