use models::EnhancementKind;
use thiserror::Error;

/// Reasons a request cannot be priced. Each names the offending value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostError {
    #[error("level must be between 1 and 9, not {level}")]
    OutOfRangeLevel { level: i32 },

    #[error("previous enhancements must be between 0 and 3, not {count}")]
    OutOfRangeRepetition { count: i32 },

    #[error("cannot add attack hex with {targets} current target hexes (division by zero)")]
    InvalidTargetCount { targets: u32 },

    #[error("unknown base enhancement {0:?}")]
    UnknownKind(EnhancementKind),
}
