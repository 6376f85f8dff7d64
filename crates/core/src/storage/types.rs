use super::ListLimitError;

/// Maximum number of rows a list operation returns.
///
/// List endpoints never rely on the store's implicit page size; every query
/// carries one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListLimit(u32);

impl ListLimit {
    /// Largest limit accepted.
    pub const MAX: u32 = 1_000;

    /// Limit for single-row lookups.
    pub const SINGLE: ListLimit = ListLimit(1);

    /// Default limit for the news feed.
    pub const NEWS: ListLimit = ListLimit(50);

    /// Default limit for the leaderboard.
    pub const TOP_SCORES: ListLimit = ListLimit(5);

    /// Creates a new limit, validating that it is in `1..=MAX`.
    pub fn new(limit: u32) -> Result<Self, ListLimitError> {
        match limit {
            0 => Err(ListLimitError::Zero),
            n if n > Self::MAX => Err(ListLimitError::TooLarge(n)),
            n => Ok(Self(n)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The limit as the signed integer the store API expects.
    pub fn as_i32(self) -> i32 {
        // Bounded by MAX, always fits.
        self.0 as i32
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}
