/// Root used by the fs provider when neither configuration nor the platform
/// data directory provides one.
pub const DEFAULT_FS_ROOT: &str = "./kill-items-data";

/// Upper bound on documents read at once during a batch load.
pub const LOAD_CONCURRENCY: usize = 16;

/// Number of ids shown before a list is summarized.
pub const SUMMARY_LIMIT: usize = 5;
