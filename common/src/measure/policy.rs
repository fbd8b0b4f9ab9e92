use std::fmt;

/// Comparison applied to every axis, footprint and volume check.
///
/// Weight checks are always inclusive and do not consult the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitPolicy {
    /// `candidate <= limit`
    #[default]
    Inclusive,
    /// `candidate < limit`
    Strict,
}

impl FitPolicy {
    #[inline]
    pub fn admits(self, candidate: f64, limit: f64) -> bool {
        match self {
            FitPolicy::Inclusive => candidate <= limit,
            FitPolicy::Strict => candidate < limit,
        }
    }
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitPolicy::Inclusive => f.write_str("inclusive"),
            FitPolicy::Strict => f.write_str("strict"),
        }
    }
}
