//! Pattern weights for the placement heuristic

/// Scoring constants for a hypothetical placement
pub struct PatternScore;

impl PatternScore {
    /// Awarded per axis when the placement forms a run of at least
    /// `MIN_SCORED_RUN` with room to extend
    pub const RUN_BONUS: u64 = 1_000_000;

    /// Shortest run that earns `RUN_BONUS`
    pub const MIN_SCORED_RUN: usize = 3;

    /// How far along an axis (each way) the scan looks for stones and
    /// extension cells
    pub const EXTENSION_REACH: i32 = 4;
}
