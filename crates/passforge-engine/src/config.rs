// Generator configuration: growth cap and candidate limit

use serde::{Deserialize, Serialize};

use crate::engine::GenerateError;
use crate::generator::candidate_count;

/// Default growth cap.
///
/// Subset sizes run up to `min(n, cap) - 1`, so the default enumerates
/// single tokens, pairs and triples. Raising the cap to 6 adds 4- and
/// 5-token orderings and multiplies the output for 10 tokens by about 44.
pub const DEFAULT_CAP: usize = 4;

/// Default ceiling on the number of candidates an eager run may produce.
pub const DEFAULT_MAX_CANDIDATES: u64 = 10_000_000;

/// Parameters of the candidate generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Growth cap bounding the subset size (must be at least 1).
    pub cap: usize,

    /// Abort eager generation when the exact candidate count would exceed
    /// this value. `None` disables the check.
    pub max_candidates: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
        }
    }
}

impl GeneratorConfig {
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: Option<u64>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Remove the candidate limit.
    pub fn unlimited(self) -> Self {
        self.with_max_candidates(None)
    }

    /// Reject configurations that cannot be used.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.cap == 0 {
            return Err(GenerateError::InvalidCap(self.cap));
        }
        Ok(())
    }

    /// Exact candidate count for a working set of `n` tokens, checked
    /// against the configured limit.
    pub fn check(&self, n: usize) -> Result<u128, GenerateError> {
        self.validate()?;
        let required = candidate_count(n, self.cap);
        let Some(limit) = self.max_candidates else {
            return required.ok_or(GenerateError::CountOverflow { tokens: n, cap: self.cap });
        };
        match required {
            Some(count) if count <= u128::from(limit) => Ok(count),
            Some(count) => Err(GenerateError::LimitExceeded { required: count, limit }),
            None => Err(GenerateError::CountOverflow { tokens: n, cap: self.cap }),
        }
    }
}
