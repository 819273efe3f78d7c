use std::collections::HashMap;

use models::{EnhancementKind, Gold};

/// Surcharge by card level, indexed from level 1.
pub const LEVEL_SURCHARGES: [Gold; 9] = [
    Gold(0),
    Gold(25),
    Gold(50),
    Gold(75),
    Gold(100),
    Gold(125),
    Gold(150),
    Gold(175),
    Gold(200),
];

/// Surcharge by number of enhancements already on the card.
pub const REPETITION_SURCHARGES: [Gold; 4] = [Gold(0), Gold(75), Gold(150), Gold(225)];

/// Add attack hex costs this amount divided by the current number of hexes.
pub const ADD_ATTACK_HEX_NUMERATOR: Gold = Gold(200);

pub const MULTIPLE_TARGET_FACTOR: u32 = 2;

lazy_static::lazy_static! {
    /// Fixed base price of every kind except [`EnhancementKind::AddAttackHex`].
    pub static ref BASE_TARIFFS: HashMap<EnhancementKind, Gold> = HashMap::from([
        (EnhancementKind::Move, Gold(30)),
        (EnhancementKind::Attack, Gold(50)),
        (EnhancementKind::Range, Gold(30)),
        (EnhancementKind::Shield, Gold(100)),
        (EnhancementKind::Push, Gold(30)),
        (EnhancementKind::Pull, Gold(30)),
        (EnhancementKind::Pierce, Gold(30)),
        (EnhancementKind::Retaliate, Gold(100)),
        (EnhancementKind::Heal, Gold(30)),
        (EnhancementKind::AddTarget, Gold(50)),
        (EnhancementKind::Poison, Gold(75)),
        (EnhancementKind::Wound, Gold(75)),
        (EnhancementKind::Muddle, Gold(50)),
        (EnhancementKind::Immobilize, Gold(100)),
        (EnhancementKind::Disarm, Gold(150)),
        (EnhancementKind::Curse, Gold(75)),
        (EnhancementKind::Strengthen, Gold(50)),
        (EnhancementKind::Bless, Gold(50)),
        (EnhancementKind::Jump, Gold(50)),
        (EnhancementKind::SpecificElement, Gold(100)),
        (EnhancementKind::AnyElement, Gold(150)),
        (EnhancementKind::SummonMove, Gold(100)),
        (EnhancementKind::SummonAttack, Gold(100)),
        (EnhancementKind::SummonRange, Gold(50)),
        (EnhancementKind::SummonHp, Gold(50)),
    ]);
}
