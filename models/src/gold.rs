use serde::Deserialize;

/// An amount of the in-game currency.
#[derive(Copy, Clone, Debug, Default, PartialOrd, Ord, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Gold(pub u32);

impl Gold {
    pub const ZERO: Gold = Gold(0);
}

impl std::fmt::Display for Gold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl std::ops::Add for Gold {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Gold(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Gold {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::Mul<u32> for Gold {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Gold(self.0 * rhs)
    }
}

impl std::iter::Sum for Gold {
    fn sum<I: Iterator<Item = Gold>>(iter: I) -> Self {
        iter.fold(Gold::ZERO, |acc, g| acc + g)
    }
}
