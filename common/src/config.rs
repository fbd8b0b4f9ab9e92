use crate::measure::FitPolicy;

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and banners, `2` prints verdicts only.
    pub quiet: u8,
    /// Comparison used when checking whether cargo fits a carrying space.
    pub policy: FitPolicy,
}
