use serde::Deserialize;

/// Number of enhancements already on the card.
#[derive(Copy, Clone, Debug, Default, PartialOrd, Ord, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RepetitionCount(pub i32);

impl RepetitionCount {
    pub const MIN: RepetitionCount = RepetitionCount(0);
    pub const MAX: RepetitionCount = RepetitionCount(3);

    const CYCLE: i32 = Self::MAX.0 + 1;

    pub fn is_valid(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }

    /// Next count, wrapping from 3 back to 0.
    pub fn increment(self) -> Self {
        Self((self.0 + 1).rem_euclid(Self::CYCLE))
    }

    /// Previous count, wrapping from 0 to 3.
    pub fn decrement(self) -> Self {
        Self((self.0 - 1).rem_euclid(Self::CYCLE))
    }
}

impl From<i32> for RepetitionCount {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RepetitionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
