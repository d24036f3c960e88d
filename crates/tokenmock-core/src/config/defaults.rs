/// Default number of tokens per run
pub const DEFAULT_TOKEN_COUNT: usize = 5;

/// Default length of each token's chart history
pub const DEFAULT_CHART_POINTS: usize = 6;

/// Minutes between consecutive chart points
pub const CHART_INTERVAL_MINUTES: usize = 4;
