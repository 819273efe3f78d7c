use models::{EnhancementKind, Gold, Level, RepetitionCount};

use crate::{
    ADD_ATTACK_HEX_NUMERATOR, BASE_TARIFFS, CostError, LEVEL_SURCHARGES, MULTIPLE_TARGET_FACTOR,
    REPETITION_SURCHARGES,
};

/// Fixed price of `kind`, or `None` for kinds whose price is derived.
pub fn base_tariff(kind: EnhancementKind) -> Option<Gold> {
    BASE_TARIFFS.get(&kind).copied()
}

/// Base cost of `kind` when the ability currently affects `targets`
/// targets or hexes.
pub fn base_cost(kind: EnhancementKind, targets: u32) -> Result<Gold, CostError> {
    if kind == EnhancementKind::AddAttackHex {
        return add_attack_hex_cost(targets);
    }
    let tariff = base_tariff(kind).ok_or(CostError::UnknownKind(kind))?;
    if targets > 1 {
        return Ok(tariff * MULTIPLE_TARGET_FACTOR);
    }
    Ok(tariff)
}

pub fn add_attack_hex_cost(targets: u32) -> Result<Gold, CostError> {
    ADD_ATTACK_HEX_NUMERATOR
        .0
        .checked_div(targets)
        .map(Gold)
        .ok_or(CostError::InvalidTargetCount { targets })
}

pub fn level_surcharge(level: Level) -> Result<Gold, CostError> {
    level
        .0
        .checked_sub(Level::MIN.0)
        .and_then(|offset| usize::try_from(offset).ok())
        .and_then(|index| LEVEL_SURCHARGES.get(index))
        .copied()
        .ok_or(CostError::OutOfRangeLevel { level: level.0 })
}

pub fn repetition_surcharge(count: RepetitionCount) -> Result<Gold, CostError> {
    usize::try_from(count.0)
        .ok()
        .and_then(|index| REPETITION_SURCHARGES.get(index))
        .copied()
        .ok_or(CostError::OutOfRangeRepetition { count: count.0 })
}
