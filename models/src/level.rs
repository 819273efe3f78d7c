use serde::Deserialize;

/// Upgrade level of an ability card.
///
/// Any integer can be held so that an out-of-range level reaches the cost
/// engine and is reported there rather than clamped here.
#[derive(Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(9);

    pub fn is_valid(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::MIN
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
