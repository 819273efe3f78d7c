use models::Gold;

/// The three components of an enhancement's price.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CostBreakdown {
    pub base: Gold,
    pub level: Gold,
    pub repetition: Gold,
}

impl CostBreakdown {
    pub fn total(&self) -> Gold {
        self.base + self.level + self.repetition
    }
}

impl std::fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "base {} + level {} + previous {} = {}",
            self.base,
            self.level,
            self.repetition,
            self.total()
        )
    }
}
